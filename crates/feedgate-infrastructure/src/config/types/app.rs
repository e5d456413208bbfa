//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{EvaluationConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingConfig,

    /// `[evaluation]`
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}
