//! Expression Engine Wrapper
//!
//! Wrapper for the evalexpr crate evaluating the boolean expressions carried
//! by `custom` rules. A rule's expression describes the violation: `true`
//! means the article breaks the rule.
//!
//! Variables exposed for an article:
//! - `title`, `body`, `author`, `category`, `thumbnail` (strings, thumbnail
//!   empty when absent)
//! - `title_length`, `body_length`, `word_count` (integers, in characters
//!   and whitespace-separated words)
//! - `has_thumbnail` (boolean)
//! - `meta_<key>` for every scalar metadata entry

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use evalexpr::{
    ContextWithMutableVariables, DefaultNumericTypes, HashMapContext, Value as EvalValue,
};
use feedgate_domain::Content;
use serde_json::Value;

use crate::error::RuleConfigError;

type EvalContext = HashMapContext<DefaultNumericTypes>;
type Eval = EvalValue<DefaultNumericTypes>;

/// Evaluates boolean expressions such as:
/// - `title_length > 80`
/// - `has_thumbnail == false && category == "sports"`
/// - `meta_region != "us"`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionEngine;

impl ExpressionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the variable context for one article
    fn build_eval_context(&self, content: &Content) -> EvalContext {
        let mut ctx = EvalContext::new();

        let strings = [
            ("title", content.title.as_str()),
            ("body", content.body.as_str()),
            ("author", content.author.as_str()),
            ("category", content.category.as_str()),
            ("thumbnail", content.thumbnail.as_deref().unwrap_or_default()),
        ];
        for (name, value) in strings {
            let _ = ctx.set_value(name.to_string(), Eval::String(value.to_string()));
        }

        let counts = [
            ("title_length", content.title_length()),
            ("body_length", content.body_length()),
            ("word_count", content.body.split_whitespace().count()),
        ];
        for (name, count) in counts {
            let _ = ctx.set_value(
                name.to_string(),
                Eval::Int(i64::try_from(count).unwrap_or(i64::MAX)),
            );
        }

        let _ = ctx.set_value(
            "has_thumbnail".to_string(),
            Eval::Boolean(content.has_thumbnail()),
        );

        for (key, value) in &content.metadata {
            if let Some(value) = Self::json_to_eval_value(value) {
                let _ = ctx.set_value(format!("meta_{key}"), value);
            }
        }

        ctx
    }

    /// Evaluate an expression against an article
    ///
    /// Expressions are authored by users, so a panic inside evalexpr (integer
    /// overflow in a debug build, for instance) is caught and reported like
    /// any other expression failure.
    pub fn evaluate_expression(
        &self,
        expression: &str,
        content: &Content,
    ) -> Result<bool, RuleConfigError> {
        let ctx = self.build_eval_context(content);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            evalexpr::eval_boolean_with_context(expression, &ctx)
        }));

        match outcome {
            Ok(result) => {
                result.map_err(|e| RuleConfigError::expression(expression, e.to_string()))
            }
            Err(payload) => Err(RuleConfigError::expression(
                expression,
                format!("evaluation panicked: {}", panic_message(&*payload)),
            )),
        }
    }

    /// Scalar JSON to evalexpr; arrays and objects have no variable form
    fn json_to_eval_value(value: &Value) -> Option<Eval> {
        match value {
            Value::Null => Some(Eval::Empty),
            Value::Bool(b) => Some(Eval::Boolean(*b)),
            Value::Number(n) => Some(
                n.as_i64()
                    .map(Eval::Int)
                    .or_else(|| n.as_f64().map(Eval::Float))
                    .unwrap_or(Eval::Empty),
            ),
            Value::String(s) => Some(Eval::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
