//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define host metrics (requests, latency, fallback outcomes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `webhost_requests_total` (counter): requests by classification, status
//! - `webhost_request_duration_seconds` (histogram): latency by classification
//! - `webhost_fallback_total` (counter): page fallbacks by action
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Labels limited to closed vocabularies to bound cardinality

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::Classification;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(classification: Classification, status: u16, start: Instant) {
    let classification = classification.as_str();
    metrics::counter!(
        "webhost_requests_total",
        "classification" => classification,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "webhost_request_duration_seconds",
        "classification" => classification
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record how a page fallback was settled ("serve_file" or "redirect").
pub fn record_fallback(action: &'static str) {
    metrics::counter!("webhost_fallback_total", "action" => action).increment(1);
}
