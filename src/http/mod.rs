//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request target)
//!     → [classifier tags the request, header policy wraps the response]
//!     → static delivery from the physical root
//!     → [page fallback: pre-rendered `.html` or redirect]
//!     → response.rs (terminal responses)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
