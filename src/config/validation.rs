//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, routes and extension sets
//! - Detect extensions claimed by both classification sets
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::HostConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("site.physical_root must not be empty")]
    EmptyPhysicalRoot,

    #[error("site.fallback_route '{0}' must start with '/'")]
    RelativeFallbackRoute(String),

    #[error("{field}: extension '{value}' must be lower case and start with '.'")]
    InvalidExtension { field: &'static str, value: String },

    #[error("extension '{0}' is listed as both cacheable and noncacheable")]
    OverlappingExtension(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.site.physical_root.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPhysicalRoot);
    }

    if !config.site.fallback_route.starts_with('/') {
        errors.push(ValidationError::RelativeFallbackRoute(
            config.site.fallback_route.clone(),
        ));
    }

    let classification = &config.classification;
    for (field, extensions) in [
        ("classification.cacheable_extensions", &classification.cacheable_extensions),
        ("classification.noncacheable_extensions", &classification.noncacheable_extensions),
    ] {
        for ext in extensions {
            if !is_valid_extension(ext) {
                errors.push(ValidationError::InvalidExtension {
                    field,
                    value: ext.clone(),
                });
            }
        }
    }

    for ext in &classification.cacheable_extensions {
        if classification.noncacheable_extensions.contains(ext) {
            errors.push(ValidationError::OverlappingExtension(ext.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let observability = &config.observability;
    if !LOG_LEVELS.contains(&observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }

    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_extension(ext: &str) -> bool {
    ext.len() > 1 && ext.starts_with('.') && ext.to_lowercase() == ext
}
