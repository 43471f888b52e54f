//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response (any status, any classification):
//!     → headers.rs (fixed security headers + conditional cache policy)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Headers applied after the inner service runs, so redirects and
//!   not-found responses carry them too
//! - No trust in client input: page lookups never leave the physical root

pub mod headers;

pub use headers::{apply_headers, header_set};
