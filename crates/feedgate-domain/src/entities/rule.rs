//! Authored validator rules
//!
//! Rules are authored and persisted elsewhere; the engine only reads them.
//! The configuration payload stays raw JSON here and is interpreted by the
//! dispatcher, so a malformed payload becomes a finding at evaluation time
//! rather than a load failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::value_objects::{FeedId, RuleId, Severity};

/// Validator type tag of an authored rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValidatorType {
    /// `length`
    Length,
    /// `required_fields`
    RequiredFields,
    /// `prohibited_content`
    ProhibitedContent,
    /// `category`
    Category,
    /// `metadata`
    Metadata,
    /// `custom`: opaque payload for the expression evaluator
    Custom,
    /// Any tag this engine does not know
    Unsupported(String),
}

impl ValidatorType {
    /// Every tag the engine can dispatch
    pub const SUPPORTED: [ValidatorType; 6] = [
        Self::Length,
        Self::RequiredFields,
        Self::ProhibitedContent,
        Self::Category,
        Self::Metadata,
        Self::Custom,
    ];

    /// Wire name of the tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Length => "length",
            Self::RequiredFields => "required_fields",
            Self::ProhibitedContent => "prohibited_content",
            Self::Category => "category",
            Self::Metadata => "metadata",
            Self::Custom => "custom",
            Self::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for ValidatorType {
    fn from(tag: String) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "length" => Self::Length,
            "required_fields" => Self::RequiredFields,
            "prohibited_content" => Self::ProhibitedContent,
            "category" => Self::Category,
            "metadata" => Self::Metadata,
            "custom" => Self::Custom,
            _ => Self::Unsupported(tag),
        }
    }
}

impl From<&str> for ValidatorType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ValidatorType> for String {
    fn from(tag: ValidatorType) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for ValidatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted, user-authored check bound to one feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRule {
    /// Persisted identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleId>,
    /// Human name
    pub name: String,
    /// What the rule is for
    #[serde(default)]
    pub description: String,
    /// Owning feed
    pub feed_id: FeedId,
    /// Validator type tag
    pub validator_type: ValidatorType,
    /// Type-specific configuration payload
    #[serde(default)]
    pub configuration: Value,
    /// Inactive rules are ignored by the evaluator
    #[serde(default = "default_active", alias = "is_active")]
    pub active: bool,
    /// Severity inherited by every finding the rule produces
    #[serde(default)]
    pub severity: Severity,
}

fn default_active() -> bool {
    true
}

impl ValidatorRule {
    /// Create an active, error-severity rule
    pub fn new<N, F, T>(name: N, feed_id: F, validator_type: T, configuration: Value) -> Self
    where
        N: Into<String>,
        F: Into<FeedId>,
        T: Into<ValidatorType>,
    {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            feed_id: feed_id.into(),
            validator_type: validator_type.into(),
            configuration,
            active: true,
            severity: Severity::Error,
        }
    }

    /// Set the persisted identity
    pub fn with_id<I: Into<RuleId>>(mut self, id: I) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether the rule applies to the given feed at evaluation time
    pub fn applies_to(&self, feed_id: FeedId) -> bool {
        self.active && self.feed_id == feed_id
    }
}
