//! Rule Dispatcher
//!
//! Maps an authored [`ValidatorRule`] onto the validator its tag names and
//! stamps the rule's severity and identity onto every finding produced.

use feedgate_domain::constants::{RULE_CUSTOM, RULE_INVALID_CONFIGURATION};
use feedgate_domain::{Content, Finding, FindingOrigin, Severity, ValidatorRule};
use tracing::warn;

use super::config::{CustomConfig, RuleCheck};
use crate::engines::ExpressionEngine;
use crate::error::RuleConfigError;
use crate::validators::{
    check_category, check_length, check_prohibited_terms, check_required_fields,
    check_required_metadata,
};

/// Runs authored rules against content
#[derive(Debug, Clone, Default)]
pub struct RuleDispatcher {
    engine: ExpressionEngine,
}

impl RuleDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one rule; a malformed configuration becomes a single error finding
    pub fn dispatch(&self, content: &Content, rule: &ValidatorRule) -> Vec<Finding> {
        match self.try_dispatch(content, rule) {
            Ok(findings) => findings,
            Err(e) => {
                warn!(
                    rule_id = ?rule.id,
                    rule = %rule.name,
                    validator_type = %rule.validator_type,
                    error = %e,
                    "Skipping rule with invalid configuration"
                );
                vec![
                    Finding::new(
                        RULE_INVALID_CONFIGURATION,
                        format!("Rule '{}' has an invalid configuration: {e}", rule.name),
                    )
                    .with_value(rule.name.clone())
                    .with_severity(Severity::Error)
                    .with_origin(origin_of(rule)),
                ]
            }
        }
    }

    /// Run one rule, surfacing configuration problems to the caller
    ///
    /// Unknown tags are not an error: they log a warning and produce nothing.
    pub fn try_dispatch(
        &self,
        content: &Content,
        rule: &ValidatorRule,
    ) -> Result<Vec<Finding>, RuleConfigError> {
        let Some(check) = RuleCheck::from_rule(rule)? else {
            warn!(
                rule_id = ?rule.id,
                rule = %rule.name,
                validator_type = %rule.validator_type,
                "Unsupported validator type, rule ignored"
            );
            return Ok(Vec::new());
        };

        let findings = match check {
            RuleCheck::Length { field, bounds } => check_length(content, field, bounds),
            RuleCheck::RequiredFields(fields) => check_required_fields(content, &fields),
            RuleCheck::ProhibitedContent { terms, case } => {
                check_prohibited_terms(content, &terms, case)
            }
            RuleCheck::Category(allowed) => check_category(content, &allowed),
            RuleCheck::Metadata(keys) => check_required_metadata(content, &keys),
            RuleCheck::Custom(config) => self.run_custom(content, rule, &config)?,
        };

        let origin = origin_of(rule);
        Ok(findings
            .into_iter()
            .map(|f| f.with_severity(rule.severity).with_origin(origin.clone()))
            .collect())
    }

    fn run_custom(
        &self,
        content: &Content,
        rule: &ValidatorRule,
        config: &CustomConfig,
    ) -> Result<Vec<Finding>, RuleConfigError> {
        let Some(expression) = config.expression.as_deref().filter(|e| !e.trim().is_empty())
        else {
            return Ok(Vec::new());
        };

        if !self.engine.evaluate_expression(expression, content)? {
            return Ok(Vec::new());
        }

        let message = config
            .message
            .clone()
            .unwrap_or_else(|| format!("Custom rule '{}' was violated", rule.name));
        let mut finding = Finding::new(RULE_CUSTOM, message).with_value(expression);
        if let Some(field) = &config.field {
            finding = finding.with_field(field.clone());
        }
        Ok(vec![finding])
    }
}

fn origin_of(rule: &ValidatorRule) -> FindingOrigin {
    FindingOrigin::Rule {
        id: rule.id,
        name: rule.name.clone(),
    }
}
