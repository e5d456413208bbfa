//! Length bounds

use feedgate_domain::constants::{
    RULE_BODY_MAX_LENGTH, RULE_BODY_MIN_LENGTH, RULE_TITLE_MAX_LENGTH, RULE_TITLE_MIN_LENGTH,
};
use feedgate_domain::{Content, Finding, LengthBounds};

/// Text field subject to length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    /// Headline
    Title,
    /// Article text
    Body,
}

impl LengthField {
    /// Parse the field name used in rule configurations
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "body" | "content" => Some(Self::Body),
            _ => None,
        }
    }

    /// Field name reported on findings
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Body => "Article body",
        }
    }

    fn min_rule(self) -> &'static str {
        match self {
            Self::Title => RULE_TITLE_MIN_LENGTH,
            Self::Body => RULE_BODY_MIN_LENGTH,
        }
    }

    fn max_rule(self) -> &'static str {
        match self {
            Self::Title => RULE_TITLE_MAX_LENGTH,
            Self::Body => RULE_BODY_MAX_LENGTH,
        }
    }

    fn measure(self, content: &Content) -> usize {
        match self {
            Self::Title => content.title_length(),
            Self::Body => content.body_length(),
        }
    }
}

/// Check one field against its bounds; both ends may fire independently
pub fn check_length(content: &Content, field: LengthField, bounds: LengthBounds) -> Vec<Finding> {
    let actual = field.measure(content);
    let mut findings = Vec::new();

    if let Some(min) = bounds.min.filter(|min| actual < *min) {
        findings.push(
            Finding::new(
                field.min_rule(),
                format!(
                    "{} must be at least {min} characters. Current: {actual}",
                    field.label()
                ),
            )
            .with_field(field.name())
            .with_value(actual),
        );
    }

    if let Some(max) = bounds.max.filter(|max| actual > *max) {
        findings.push(
            Finding::new(
                field.max_rule(),
                format!(
                    "{} must not exceed {max} characters. Current: {actual}",
                    field.label()
                ),
            )
            .with_field(field.name())
            .with_value(actual),
        );
    }

    findings
}
