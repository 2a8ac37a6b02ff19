//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → CLI flags override individual fields
//!     → handed to the workbench at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file uses the compiled-in targets
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is read once; the target selection is runtime state, not config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::ClientConfig;
pub use schema::CorrectionConfig;
pub use schema::EndpointsConfig;
pub use schema::HealthCheckConfig;
pub use schema::ObservabilityConfig;
pub use schema::UiConfig;
