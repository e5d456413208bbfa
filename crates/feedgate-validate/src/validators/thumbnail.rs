//! Thumbnail presence

use feedgate_domain::constants::{FIELD_THUMBNAIL, RULE_THUMBNAIL_REQUIRED};
use feedgate_domain::{Content, Finding};

/// Error when a thumbnail is required and the reference is absent or blank
pub fn check_thumbnail(content: &Content, required: bool) -> Vec<Finding> {
    if !required || content.has_thumbnail() {
        return Vec::new();
    }
    vec![
        Finding::new(
            RULE_THUMBNAIL_REQUIRED,
            "Thumbnail is required for this feed",
        )
        .with_field(FIELD_THUMBNAIL),
    ]
}
