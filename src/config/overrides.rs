//! Command-line overrides layered on top of the file configuration.

use std::path::PathBuf;

use crate::config::schema::HostConfig;

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Overrides {
    /// Apply the overrides. The result still needs validation.
    pub fn apply(self, mut config: HostConfig) -> HostConfig {
        if let Some(port) = self.port {
            config.listener.bind_address = with_port(&config.listener.bind_address, port);
        }
        if let Some(root) = self.root {
            config.site.physical_root = root;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level.to_lowercase();
        }
        config
    }
}

/// Replace the port of `address`, keeping its host (IPv6 brackets included).
/// An address without a usable host falls back to all interfaces.
fn with_port(address: &str, port: u16) -> String {
    let host = match address.rsplit_once(':') {
        Some((host, _)) if !host.is_empty() && (!host.contains(':') || host.starts_with('[')) => {
            host
        }
        _ => "0.0.0.0",
    };
    format!("{host}:{port}")
}
