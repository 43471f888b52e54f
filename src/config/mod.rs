//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (port, root, log level)
//!     → validation.rs (semantic checks)
//!     → HostConfig (validated, immutable)
//!     → PhysicalRoot shared via Arc with every request
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults so the host runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use overrides::Overrides;
pub use schema::ClassificationConfig;
pub use schema::ExtensionMatching;
pub use schema::HostConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::SiteConfig;
pub use schema::TimeoutConfig;
pub use validation::{validate_config, ValidationError};
