//! Rule configuration errors
//!
//! Raised while turning an authored rule's raw payload into a typed check.
//! These never leave the dispatcher: each becomes a single
//! `invalid_rule_configuration` finding naming the offending rule.

use thiserror::Error;

/// Why an authored rule could not be applied
#[derive(Debug, Error)]
pub enum RuleConfigError {
    /// Payload does not match the shape of its validator type
    #[error("configuration does not match the '{validator_type}' shape: {source}")]
    Payload {
        /// Validator type tag of the rule
        validator_type: String,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Length rule names a field other than title or body
    #[error("unknown length field '{field}', expected 'title' or 'body'")]
    UnknownLengthField {
        /// Field as authored
        field: String,
    },

    /// Custom expression failed to parse or evaluate
    #[error("expression '{expression}' failed: {message}")]
    Expression {
        /// Expression as authored
        expression: String,
        /// Evaluator diagnostic
        message: String,
    },
}

impl RuleConfigError {
    /// Create a payload error
    pub fn payload<S: Into<String>>(validator_type: S, source: serde_json::Error) -> Self {
        Self::Payload {
            validator_type: validator_type.into(),
            source,
        }
    }

    /// Create an expression error
    pub fn expression<E: Into<String>, M: Into<String>>(expression: E, message: M) -> Self {
        Self::Expression {
            expression: expression.into(),
            message: message.into(),
        }
    }
}
