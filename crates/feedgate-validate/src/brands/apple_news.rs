use feedgate_domain::constants::{
    APPLE_NEWS_BODY_MIN_LENGTH, APPLE_NEWS_TITLE_MAX_LENGTH, FIELD_THUMBNAIL, RULE_BODY_MIN_LENGTH,
    RULE_CATEGORY_PREFERENCE, RULE_THUMBNAIL_REQUIRED, RULE_TITLE_MAX_LENGTH,
};
use feedgate_domain::{Content, FeedBrand, Finding};

use super::{BrandProfile, brand_error, brand_warning};

const BRAND: FeedBrand = FeedBrand::AppleNews;

const PREFERRED_CATEGORIES: [&str; 5] =
    ["technology", "business", "entertainment", "sports", "health"];

/// Apple News bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleNewsProfile;

impl BrandProfile for AppleNewsProfile {
    fn check(&self, content: &Content) -> Vec<Finding> {
        let mut findings = Vec::new();
        let title_len = content.title_length();
        let body_len = content.body_length();

        if title_len > APPLE_NEWS_TITLE_MAX_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_TITLE_MAX_LENGTH,
                    format!(
                        "Apple News title cannot exceed {APPLE_NEWS_TITLE_MAX_LENGTH} characters"
                    ),
                )
                .with_field("title")
                .with_value(title_len),
            );
        }

        if !content.has_thumbnail() {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_THUMBNAIL_REQUIRED,
                    "Apple News requires high-quality images",
                )
                .with_field(FIELD_THUMBNAIL),
            );
        }

        if body_len < APPLE_NEWS_BODY_MIN_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_BODY_MIN_LENGTH,
                    format!(
                        "Apple News articles should be at least {APPLE_NEWS_BODY_MIN_LENGTH} characters"
                    ),
                )
                .with_field("body")
                .with_value(body_len),
            );
        }

        let category = content.category.to_lowercase();
        if !PREFERRED_CATEGORIES.contains(&category.as_str()) {
            findings.push(
                brand_warning(
                    BRAND,
                    RULE_CATEGORY_PREFERENCE,
                    "Category may not be optimal for Apple News distribution",
                )
                .with_field("category")
                .with_value(content.category.clone()),
            );
        }

        findings
    }
}
