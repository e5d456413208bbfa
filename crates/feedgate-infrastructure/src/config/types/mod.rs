//! Configuration types module

pub mod app;
pub mod evaluation;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use evaluation::EvaluationConfig;
pub use logging::LoggingConfig;
