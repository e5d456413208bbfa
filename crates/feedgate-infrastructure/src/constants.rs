//! Infrastructure layer constants
//!
//! Domain constants (finding codes, brand thresholds) are defined in
//! `feedgate_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "feedgate.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "feedgate";

/// Environment variable prefix for configuration, joined with `__`
pub const CONFIG_ENV_PREFIX: &str = "FEEDGATE";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "FEEDGATE_LOG";

/// File name stem of the rolling log when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "feedgate";

// ============================================================================
// EVALUATION CONSTANTS
// ============================================================================

/// Default prefix of minted audit ids
pub const DEFAULT_AUDIT_ID_PREFIX: &str = "audit";
