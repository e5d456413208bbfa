//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the compliance engine.
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration through figment |
//! | [`bootstrap`] | Builds a configured `ComplianceEvaluator` |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context helpers converting foreign errors to the domain `Error` |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::EvaluatorFactory;
pub use config::{AppConfig, ConfigLoader, EvaluationConfig, LoggingConfig};
pub use error_ext::ErrorContext;
