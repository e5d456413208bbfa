//! Required metadata keys
//!
//! Unlike [`check_required_fields`](super::check_required_fields) this never
//! consults the core article fields: only the metadata map counts.

use feedgate_domain::constants::RULE_REQUIRED_METADATA;
use feedgate_domain::{Content, Finding};

use super::required_fields::is_blank;

/// Report each key missing from, or blank in, the metadata map
pub fn check_required_metadata<S: AsRef<str>>(content: &Content, keys: &[S]) -> Vec<Finding> {
    keys.iter()
        .map(AsRef::as_ref)
        .filter(|key| !key.trim().is_empty())
        .filter(|key| is_blank(content.metadata.get(*key)))
        .map(|key| {
            Finding::new(
                RULE_REQUIRED_METADATA,
                format!("Required metadata field '{key}' is missing or empty"),
            )
            .with_field(key)
        })
        .collect()
}
