//! Findings
//!
//! A finding is one reported violation or advisory. Findings are plain value
//! records: they copy the offending value out of the content instead of
//! borrowing it, so a verdict can outlive the article it was computed from.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::ids::RuleId;
use crate::entities::FeedBrand;

/// Whether a finding blocks publication or is informational
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks publication
    #[default]
    Error,
    /// Reported, never affects `passed`
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Which part of the evaluation produced a finding
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingOrigin {
    /// Baseline check derived from the feed's guideline set
    #[default]
    Guideline,
    /// Built-in feed brand profile
    Brand {
        /// Brand whose bundle fired
        brand: FeedBrand,
    },
    /// Authored validator rule
    Rule {
        /// Rule identifier, when the rule has been persisted
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<RuleId>,
        /// Human rule name
        name: String,
    },
    /// The evaluator itself could not complete
    Evaluator,
}

/// One violation or advisory reported by a validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Machine-readable check code (e.g. `title_max_length`)
    pub rule: String,
    /// Human-readable description
    pub message: String,
    /// Field implicated, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Offending value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Error or warning
    #[serde(default)]
    pub severity: Severity,
    /// Producer of the finding
    #[serde(default)]
    pub origin: FindingOrigin,
}

impl Finding {
    /// Create an error-severity guideline finding
    pub fn new<R: Into<String>, M: Into<String>>(rule: R, message: M) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            field: None,
            value: None,
            severity: Severity::Error,
            origin: FindingOrigin::Guideline,
        }
    }

    /// Attach the implicated field
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the offending value
    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Override the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Override the origin
    pub fn with_origin(mut self, origin: FindingOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Whether this finding blocks publication
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        Ok(())
    }
}
