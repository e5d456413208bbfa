//! Category allow-list

use feedgate_domain::constants::RULE_INVALID_CATEGORY;
use feedgate_domain::{Content, Finding};

/// Error when the category is not an exact, case-sensitive member of `allowed`
///
/// An empty allow-list means the feed does not constrain categories.
pub fn check_category<S: AsRef<str>>(content: &Content, allowed: &[S]) -> Vec<Finding> {
    if allowed.is_empty() || allowed.iter().any(|c| c.as_ref() == content.category) {
        return Vec::new();
    }

    let listing = allowed
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        Finding::new(
            RULE_INVALID_CATEGORY,
            format!(
                "Category '{}' is not allowed. Allowed: {listing}",
                content.category
            ),
        )
        .with_field("category")
        .with_value(content.category.clone()),
    ]
}
