//! TCP listener setup.
//!
//! # Responsibilities
//! - Parse and bind the configured address
//! - Turn bind failures into a fatal, self-describing startup error

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Configured address is not a socket address.
    #[error("Invalid bind address '{address}': {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| ListenerError::Address {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ListenerError::Bind { address, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        };
        let listener = bind(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_port_already_bound_is_fatal() {
        let first = bind(&ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        })
        .await
        .unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(&ListenerConfig {
            bind_address: taken.to_string(),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ListenerError::Bind { address, .. } if address == taken));
        assert!(err.to_string().starts_with("Failed to bind"));
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let err = bind(&ListenerConfig {
            bind_address: "localhost".into(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ListenerError::Address { .. }));
    }
}
