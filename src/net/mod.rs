//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured bind address
//!     → listener.rs (parse, bind)
//!     → Hand off to HTTP layer (axum::serve)
//! ```
//!
//! # Design Decisions
//! - Plain HTTP only; TLS is terminated in front of the host
//! - A bind failure aborts startup, no retry

pub mod listener;

pub use listener::{bind, ListenerError};
