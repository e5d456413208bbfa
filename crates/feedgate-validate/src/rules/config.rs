//! Typed rule configurations
//!
//! [`RuleCheck`] is the closed set of checks an authored rule can express.
//! It is parsed from the raw [`ValidatorRule`] each time the rule is
//! dispatched, so the raw payload stays the stored form and a bad payload
//! only ever affects the evaluation it takes part in.

use feedgate_domain::{LengthBounds, ValidatorRule, ValidatorType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RuleConfigError;
use crate::validators::{LengthField, MatchCase};

/// `length` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthConfig {
    /// `title` or `body`
    pub field: String,
    #[serde(default)]
    pub min_length: Option<i64>,
    #[serde(default)]
    pub max_length: Option<i64>,
}

/// `required_fields` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredFieldsConfig {
    #[serde(default)]
    pub fields: Vec<String>,
}

/// `prohibited_content` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProhibitedContentConfig {
    #[serde(default, alias = "terms")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// `category` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    pub allowed_categories: Vec<String>,
}

/// `metadata` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub required_fields: Vec<String>,
}

/// `custom` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Boolean expression; `true` means violated. Absent means always pass.
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Field reported on the finding
    #[serde(default)]
    pub field: Option<String>,
}

/// A rule's check, resolved from its tag and payload
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCheck {
    Length {
        field: LengthField,
        bounds: LengthBounds,
    },
    RequiredFields(Vec<String>),
    ProhibitedContent {
        terms: Vec<String>,
        case: MatchCase,
    },
    Category(Vec<String>),
    Metadata(Vec<String>),
    Custom(CustomConfig),
}

impl RuleCheck {
    /// Resolve a rule into its check
    ///
    /// Returns `Ok(None)` for a tag this engine does not know. A `null`
    /// payload reads as an empty object.
    pub fn from_rule(rule: &ValidatorRule) -> Result<Option<Self>, RuleConfigError> {
        let tag = rule.validator_type.as_str();
        let payload = &rule.configuration;

        let check = match &rule.validator_type {
            ValidatorType::Length => {
                let config: LengthConfig = parse(tag, payload)?;
                let field = LengthField::parse(&config.field).ok_or_else(|| {
                    RuleConfigError::UnknownLengthField {
                        field: config.field.clone(),
                    }
                })?;
                Self::Length {
                    field,
                    bounds: LengthBounds::from_raw(config.min_length, config.max_length),
                }
            }
            ValidatorType::RequiredFields => {
                Self::RequiredFields(parse::<RequiredFieldsConfig>(tag, payload)?.fields)
            }
            ValidatorType::ProhibitedContent => {
                let config: ProhibitedContentConfig = parse(tag, payload)?;
                Self::ProhibitedContent {
                    terms: config.keywords,
                    case: if config.case_sensitive {
                        MatchCase::Sensitive
                    } else {
                        MatchCase::Insensitive
                    },
                }
            }
            ValidatorType::Category => {
                Self::Category(parse::<CategoryConfig>(tag, payload)?.allowed_categories)
            }
            ValidatorType::Metadata => {
                Self::Metadata(parse::<MetadataConfig>(tag, payload)?.required_fields)
            }
            ValidatorType::Custom => Self::Custom(parse(tag, payload)?),
            ValidatorType::Unsupported(_) => return Ok(None),
        };

        Ok(Some(check))
    }
}

fn parse<T: DeserializeOwned>(tag: &str, payload: &Value) -> Result<T, RuleConfigError> {
    let payload = if payload.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        payload.clone()
    };
    serde_json::from_value(payload).map_err(|e| RuleConfigError::payload(tag, e))
}
