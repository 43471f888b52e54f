//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path + query)
//!     → classifier.rs (cacheable | noncacheable | page)
//!     → [static delivery attempt]
//!     → fallback.rs (page only: serve `<path>.html` or redirect)
//! ```
//!
//! # Design Decisions
//! - Classifier and resolver compiled at startup, immutable at runtime
//! - Deterministic: same input always yields the same classification
//! - Only the resolver touches the file system

pub mod classifier;
pub mod fallback;

pub use classifier::{classify, Classification, Classifier};
pub use fallback::{FallbackResolver, PhysicalRoot, ResolvedAction};
