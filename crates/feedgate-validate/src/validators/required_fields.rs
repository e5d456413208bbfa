//! Required-field presence

use feedgate_domain::constants::RULE_REQUIRED_FIELD;
use feedgate_domain::{Content, Finding};
use serde_json::Value;

/// Report every listed field that is absent, null or blank
///
/// Core field names resolve against the content itself; anything else is
/// looked up in the metadata map.
pub fn check_required_fields<S: AsRef<str>>(content: &Content, fields: &[S]) -> Vec<Finding> {
    fields
        .iter()
        .map(AsRef::as_ref)
        .filter(|field| !field.trim().is_empty())
        .filter_map(|field| {
            let value = content.field(field);
            is_blank(value.as_ref()).then(|| {
                let finding = Finding::new(
                    RULE_REQUIRED_FIELD,
                    format!("Required field '{field}' is missing or empty"),
                )
                .with_field(field);
                match value {
                    Some(value) => finding.with_value(value),
                    None => finding,
                }
            })
        })
        .collect()
}

/// Absent, null, or a string that is empty after trimming
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
