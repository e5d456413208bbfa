//! Validator Set
//!
//! Independent, total checks. Each takes the content plus the slice of
//! configuration it needs and returns error-severity findings tagged with a
//! guideline origin; callers re-tag severity and origin as appropriate.

pub mod category;
pub mod length;
pub mod metadata;
pub mod prohibited;
pub mod required_fields;
pub mod thumbnail;

pub use category::check_category;
pub use length::{LengthField, check_length};
pub use metadata::check_required_metadata;
pub use prohibited::{MatchCase, check_prohibited_terms};
pub use required_fields::check_required_fields;
pub use thumbnail::check_thumbnail;

use feedgate_domain::{Content, EffectiveGuideline, Finding};

/// Run the guideline-driven baseline checks in their fixed order
///
/// Title length, body length, required fields, prohibited content,
/// category, thumbnail.
pub fn check_guidelines(content: &Content, guideline: &EffectiveGuideline) -> Vec<Finding> {
    let mut findings = check_length(content, LengthField::Title, guideline.title);
    findings.extend(check_length(content, LengthField::Body, guideline.body));
    findings.extend(check_required_fields(content, &guideline.required_fields));
    findings.extend(check_prohibited_terms(
        content,
        &guideline.prohibited_terms,
        MatchCase::Insensitive,
    ));
    findings.extend(check_category(content, &guideline.allowed_categories));
    findings.extend(check_thumbnail(content, guideline.thumbnail_required));
    findings
}
