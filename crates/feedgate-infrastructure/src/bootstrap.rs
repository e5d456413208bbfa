//! Evaluator bootstrap
//!
//! Turns the `[evaluation]` configuration section into a ready
//! `ComplianceEvaluator`.

use std::sync::Arc;

use feedgate_domain::RuleSource;
use feedgate_validate::{ComplianceEvaluator, InMemoryVerdictCache, TimestampAuditIds};
use tracing::debug;

use crate::config::EvaluationConfig;

/// Builds evaluators from configuration
pub struct EvaluatorFactory;

impl EvaluatorFactory {
    /// Evaluator honouring the brand-profile and cache toggles and the audit id prefix
    pub fn from_config(config: &EvaluationConfig, rules: Arc<dyn RuleSource>) -> ComplianceEvaluator {
        let mut evaluator = ComplianceEvaluator::new(rules)
            .with_brand_profiles(config.brand_profiles_enabled)
            .with_audit_ids(Arc::new(TimestampAuditIds::new(
                config.audit_id_prefix.clone(),
            )));

        if config.cache_enabled {
            evaluator = evaluator.with_cache(Arc::new(InMemoryVerdictCache::new()));
        }

        debug!(
            brand_profiles = config.brand_profiles_enabled,
            cache = config.cache_enabled,
            audit_id_prefix = %config.audit_id_prefix,
            "Compliance evaluator configured"
        );
        evaluator
    }
}
