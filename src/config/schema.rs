//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the host.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the web host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Site layout: physical root and fallback route.
    pub site: SiteConfig,

    /// Extension sets used to classify requests.
    pub classification: ClassificationConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3001".to_string(),
        }
    }
}

/// Where the pre-rendered site lives and what to do when a page is missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the generated HTML and static assets.
    pub physical_root: PathBuf,

    /// Route that requests for missing pages are redirected to.
    pub fallback_route: String,

    /// Serve `index.html` for directory requests such as `/`.
    pub append_index_html: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            physical_root: PathBuf::from("../dist"),
            fallback_route: "/posts/home".to_string(),
            append_index_html: true,
        }
    }
}

/// How extensions are matched against the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMatching {
    /// Extension may appear anywhere in the path or query string.
    #[default]
    Substring,
    /// Extension must end the path; the query string is ignored.
    Suffix,
}

/// Extension sets for request classification.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Extensions served with a long-lived immutable cache policy.
    pub cacheable_extensions: Vec<String>,

    /// Extensions served as static files without a cache policy.
    pub noncacheable_extensions: Vec<String>,

    /// Matching strategy.
    pub matching: ExtensionMatching,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            cacheable_extensions: vec![".jpg".to_string(), ".ico".to_string()],
            noncacheable_extensions: vec![".js".to_string(), ".json".to_string()],
            matching: ExtensionMatching::Substring,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable text or one JSON object per line.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
