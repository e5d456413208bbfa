//! Validator catalog
//!
//! Describes every dispatchable validator type and the configuration it
//! expects, for authoring front-ends.

use feedgate_domain::ValidatorType;
use serde::Serialize;
use serde_json::{Value, json};

/// One entry of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorDescriptor {
    pub validator_type: ValidatorType,
    pub description: &'static str,
    /// Example configuration payload
    pub configuration: Value,
}

/// List every supported validator type in dispatch order
pub fn validator_catalog() -> Vec<ValidatorDescriptor> {
    ValidatorType::SUPPORTED
        .into_iter()
        .map(|validator_type| {
            let (description, configuration) = describe(&validator_type);
            ValidatorDescriptor {
                validator_type,
                description,
                configuration,
            }
        })
        .collect()
}

fn describe(validator_type: &ValidatorType) -> (&'static str, Value) {
    match validator_type {
        ValidatorType::Length => (
            "Bounds the character length of the title or body",
            json!({"field": "title", "min_length": 10, "max_length": 100}),
        ),
        ValidatorType::RequiredFields => (
            "Requires fields to be present and non-blank",
            json!({"fields": ["author", "category"]}),
        ),
        ValidatorType::ProhibitedContent => (
            "Rejects articles whose title or body contains a keyword",
            json!({"keywords": ["gambling"], "case_sensitive": false}),
        ),
        ValidatorType::Category => (
            "Restricts the article category to an allow-list",
            json!({"allowed_categories": ["news", "sports"]}),
        ),
        ValidatorType::Metadata => (
            "Requires keys in the article metadata",
            json!({"required_fields": ["region"]}),
        ),
        ValidatorType::Custom => (
            "Flags articles for which a boolean expression holds",
            json!({"expression": "word_count < 50", "message": "Article is too short"}),
        ),
        ValidatorType::Unsupported(_) => ("Not supported", Value::Null),
    }
}
