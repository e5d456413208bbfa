use feedgate_domain::constants::{
    FIELD_CONTENT, FIELD_THUMBNAIL, MSN_BODY_MIN_LENGTH, MSN_BODY_PREFERRED_MAX_LENGTH,
    MSN_TITLE_MAX_LENGTH, RULE_BODY_MAX_LENGTH, RULE_BODY_MIN_LENGTH, RULE_PROHIBITED_CONTENT,
    RULE_REQUIRED_FIELD, RULE_THUMBNAIL_REQUIRED, RULE_TITLE_MAX_LENGTH,
};
use feedgate_domain::{Content, FeedBrand, Finding};

use super::{BrandProfile, brand_error, brand_warning, is_blank};

const BRAND: FeedBrand = FeedBrand::Msn;

const PROHIBITED_KEYWORDS: [&str; 3] = ["gambling", "adult content", "violence"];

/// MSN bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct MsnProfile;

impl BrandProfile for MsnProfile {
    fn check(&self, content: &Content) -> Vec<Finding> {
        let mut findings = Vec::new();
        let title_len = content.title_length();
        let body_len = content.body_length();

        if title_len > MSN_TITLE_MAX_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_TITLE_MAX_LENGTH,
                    format!("MSN title cannot exceed {MSN_TITLE_MAX_LENGTH} characters"),
                )
                .with_field("title")
                .with_value(title_len),
            );
        }

        if body_len < MSN_BODY_MIN_LENGTH {
            findings.push(
                brand_error(
                    BRAND,
                    RULE_BODY_MIN_LENGTH,
                    format!("MSN articles must be at least {MSN_BODY_MIN_LENGTH} characters"),
                )
                .with_field("body")
                .with_value(body_len),
            );
        }

        if body_len > MSN_BODY_PREFERRED_MAX_LENGTH {
            findings.push(
                brand_warning(
                    BRAND,
                    RULE_BODY_MAX_LENGTH,
                    format!("MSN prefers articles under {MSN_BODY_PREFERRED_MAX_LENGTH} characters"),
                )
                .with_field("body")
                .with_value(body_len),
            );
        }

        if !content.has_thumbnail() {
            findings.push(
                brand_error(BRAND, RULE_THUMBNAIL_REQUIRED, "MSN requires a thumbnail image")
                    .with_field(FIELD_THUMBNAIL),
            );
        }

        let text = content.searchable_text().to_lowercase();
        for keyword in PROHIBITED_KEYWORDS {
            if text.contains(keyword) {
                findings.push(
                    brand_error(
                        BRAND,
                        RULE_PROHIBITED_CONTENT,
                        format!("Article contains prohibited content: {keyword}"),
                    )
                    .with_field(FIELD_CONTENT)
                    .with_value(keyword),
                );
            }
        }

        for (field, value) in [("author", &content.author), ("category", &content.category)] {
            if is_blank(value) {
                findings.push(
                    brand_error(
                        BRAND,
                        RULE_REQUIRED_FIELD,
                        format!("Required field missing: {field}"),
                    )
                    .with_field(field),
                );
            }
        }

        findings
    }
}
