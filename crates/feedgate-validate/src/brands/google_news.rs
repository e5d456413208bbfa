use std::sync::LazyLock;

use feedgate_domain::constants::{
    GOOGLE_NEWS_BODY_MIN_LENGTH, GOOGLE_NEWS_TITLE_MAX_LENGTH, RULE_BODY_MIN_LENGTH,
    RULE_CLICKBAIT_TITLE, RULE_REQUIRED_FIELD, RULE_TITLE_MAX_LENGTH,
};
use feedgate_domain::{Content, FeedBrand, Finding};
use regex::Regex;

use super::{BrandProfile, brand_error, brand_warning, is_blank};

const BRAND: FeedBrand = FeedBrand::GoogleNews;

/// Clickbait phrases, matched case-insensitively against the title
static CLICKBAIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)you won't believe",
        r"(?i)shocking",
        r"(?i)this will blow your mind",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Google News bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleNewsProfile;

impl BrandProfile for GoogleNewsProfile {
    fn check(&self, content: &Content) -> Vec<Finding> {
        let mut findings = Vec::new();
        let title_len = content.title_length();
        let body_len = content.body_length();

        if title_len > GOOGLE_NEWS_TITLE_MAX_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_TITLE_MAX_LENGTH,
                    format!(
                        "Google News title cannot exceed {GOOGLE_NEWS_TITLE_MAX_LENGTH} characters"
                    ),
                )
                .with_field("title")
                .with_value(title_len),
            );
        }

        if body_len < GOOGLE_NEWS_BODY_MIN_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_BODY_MIN_LENGTH,
                    format!(
                        "Google News articles must be at least {GOOGLE_NEWS_BODY_MIN_LENGTH} characters"
                    ),
                )
                .with_field("body")
                .with_value(body_len),
            );
        }

        if is_blank(&content.author) {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_REQUIRED_FIELD,
                    "Google News requires author attribution",
                )
                .with_field("author"),
            );
        }

        // One warning per matched pattern
        for pattern in CLICKBAIT_PATTERNS.iter() {
            if let Some(hit) = pattern.find(&content.title) {
                findings.push(
                    brand_warning(
                        BRAND,
                        RULE_CLICKBAIT_TITLE,
                        "Title may be considered clickbait by Google News",
                    )
                    .with_field("title")
                    .with_value(hit.as_str()),
                );
            }
        }

        findings
    }
}
