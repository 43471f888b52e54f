//! Static Blog Web Host Library
//!
//! Serves a pre-rendered blog from a physical root directory. Every request is
//! classified by extension, gets a fixed set of security headers (plus an
//! immutable cache policy for cacheable assets), and page requests that have
//! no file of their own are mapped to `<path>.html` or redirected to the
//! fallback route.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────▶ net::listener ──▶ http::server ──▶ routing::classifier
//!                                                     │
//!                                                     ▼
//!                                           static delivery (ServeDir)
//!                                                     │ not found
//!                                                     ▼
//!                                           routing::fallback (page only)
//!                                                     │
//!     Client Response                                 ▼
//!     ◀────── security::headers ◀──────── file │ redirect │ 404
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::HostConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
