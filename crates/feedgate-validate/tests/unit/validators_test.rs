//! Tests for the guideline validators

use feedgate_domain::{ApiSpecification, Content, GuidelineSet};
use feedgate_validate::check_guidelines;
use serde_json::json;

use crate::test_utils::compliant_content;

#[test]
fn test_fixed_check_order() {
    let guidelines = GuidelineSet {
        title_max_length: Some(5),
        body_min_length: Some(10_000),
        required_fields: Some(vec!["author".into()]),
        prohibited_terms: Some(vec!["transit".into()]),
        allowed_categories: Some(vec!["sports".into()]),
        thumbnail_required: true,
        ..Default::default()
    };
    let mut content = compliant_content();
    content.author = String::new();
    content.thumbnail = None;

    let rules: Vec<_> = check_guidelines(&content, &guidelines.resolve())
        .into_iter()
        .map(|f| f.rule)
        .collect();

    assert_eq!(
        rules,
        vec![
            "title_max_length",
            "body_min_length",
            "required_field",
            "prohibited_content",
            "invalid_category",
            "thumbnail_required",
        ]
    );
}

#[test]
fn test_override_block_replaces_base_lists() {
    let guidelines = GuidelineSet {
        prohibited_terms: Some(vec!["transit".into()]),
        api_specification: Some(ApiSpecification {
            prohibited_terms: Some(vec!["casino".into()]),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(check_guidelines(&compliant_content(), &guidelines.resolve()).is_empty());
}

#[test]
fn test_both_title_bounds_checked_independently_of_body() {
    let guidelines = GuidelineSet {
        title_min_length: Some(10),
        body_max_length: Some(3),
        ..Default::default()
    };
    let content = Content::new("short", "long body", "a", "c");
    let findings = check_guidelines(&content, &guidelines.resolve());

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].rule, "title_min_length");
    assert_eq!(findings[0].value, Some(json!(5)));
    assert_eq!(findings[1].rule, "body_max_length");
    assert_eq!(findings[1].value, Some(json!(9)));
}

#[test]
fn test_lengths_count_characters_not_bytes() {
    let guidelines = GuidelineSet {
        title_max_length: Some(5),
        ..Default::default()
    };
    let content = Content::new("éàüöç", "", "a", "c");
    assert!(check_guidelines(&content, &guidelines.resolve()).is_empty());
}

#[test]
fn test_category_match_is_case_sensitive() {
    let guidelines = GuidelineSet {
        allowed_categories: Some(vec!["Business".into()]),
        ..Default::default()
    };
    let findings = check_guidelines(&compliant_content(), &guidelines.resolve());
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message,
        "Category 'business' is not allowed. Allowed: Business"
    );
}

#[test]
fn test_required_field_falls_back_to_metadata() {
    let guidelines = GuidelineSet {
        required_fields: Some(vec!["region".into()]),
        ..Default::default()
    };
    let with_region = compliant_content().with_metadata("region", "emea");
    assert!(check_guidelines(&with_region, &guidelines.resolve()).is_empty());

    let findings = check_guidelines(&compliant_content(), &guidelines.resolve());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field.as_deref(), Some("region"));
}

#[test]
fn test_negative_bounds_mean_no_constraint() {
    let guidelines = GuidelineSet {
        title_min_length: Some(-4),
        title_max_length: Some(0),
        ..Default::default()
    };
    let content = Content::new("", "", "", "");
    assert!(check_guidelines(&content, &guidelines.resolve()).is_empty());
}
