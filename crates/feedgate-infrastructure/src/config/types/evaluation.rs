//! Evaluation configuration types

use crate::constants::DEFAULT_AUDIT_ID_PREFIX;
use serde::{Deserialize, Serialize};

/// Compliance evaluation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Run the MSN / Google News / Apple News bundles for branded feeds
    pub brand_profiles_enabled: bool,

    /// Keep verdicts of identified content in memory
    pub cache_enabled: bool,

    /// Prefix of minted audit ids
    pub audit_id_prefix: String,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            brand_profiles_enabled: true,
            cache_enabled: true,
            audit_id_prefix: DEFAULT_AUDIT_ID_PREFIX.to_string(),
        }
    }
}
