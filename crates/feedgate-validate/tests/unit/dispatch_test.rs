//! Tests for authored rule dispatch

use feedgate_domain::{FindingOrigin, RuleId, Severity, ValidatorRule};
use feedgate_validate::{RuleConfigError, RuleDispatcher};
use serde_json::json;

use crate::test_utils::compliant_content;

#[test]
fn test_findings_carry_rule_origin() {
    let rule = ValidatorRule::new(
        "no transit",
        7,
        "prohibited_content",
        json!({"keywords": ["TRANSIT"]}),
    )
    .with_id(11);
    let findings = RuleDispatcher::new().dispatch(&compliant_content(), &rule);

    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].origin,
        FindingOrigin::Rule {
            id: Some(RuleId(11)),
            name: "no transit".into(),
        }
    );
    assert_eq!(findings[0].value, Some(json!("TRANSIT")));
}

#[test]
fn test_case_sensitive_keywords() {
    let rule = ValidatorRule::new(
        "exact",
        7,
        "prohibited_content",
        json!({"keywords": ["TRANSIT"], "case_sensitive": true}),
    );
    assert!(
        RuleDispatcher::new()
            .dispatch(&compliant_content(), &rule)
            .is_empty()
    );
}

#[test]
fn test_metadata_rule_ignores_core_fields() {
    let rule = ValidatorRule::new(
        "meta",
        7,
        "metadata",
        json!({"required_fields": ["author", "region"]}),
    )
    .with_severity(Severity::Warning);
    let findings = RuleDispatcher::new().dispatch(&compliant_content(), &rule);

    let fields: Vec<_> = findings.iter().filter_map(|f| f.field.as_deref()).collect();
    assert_eq!(fields, vec!["author", "region"]);
    assert!(findings.iter().all(|f| f.severity == Severity::Warning));
}

#[test]
fn test_category_rule() {
    let rule = ValidatorRule::new(
        "sections",
        7,
        "category",
        json!({"allowed_categories": ["sports", "health"]}),
    );
    let findings = RuleDispatcher::new().dispatch(&compliant_content(), &rule);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "invalid_category");
}

#[test]
fn test_failing_expression_is_a_configuration_error() {
    let rule = ValidatorRule::new("bad expr", 7, "custom", json!({"expression": "nope >"}));
    let dispatcher = RuleDispatcher::new();

    let err = dispatcher
        .try_dispatch(&compliant_content(), &rule)
        .unwrap_err();
    assert!(matches!(err, RuleConfigError::Expression { .. }));

    let findings = dispatcher.dispatch(&compliant_content(), &rule);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "invalid_rule_configuration");
}

#[test]
fn test_tag_is_matched_case_insensitively() {
    let rule = ValidatorRule::new(
        "fields",
        7,
        " Required_Fields ",
        json!({"fields": ["summary"]}),
    );
    let findings = RuleDispatcher::new().dispatch(&compliant_content(), &rule);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "required_field");
}

#[test]
fn test_overflowing_expression_never_escapes_dispatch() {
    let rule = ValidatorRule::new(
        "overflow",
        7,
        "custom",
        json!({"expression": "math::abs(-9223372036854775807 - 1) > 0"}),
    );
    let findings = RuleDispatcher::new().dispatch(&compliant_content(), &rule);

    // Release builds wrap instead of panicking and the expression is false
    if cfg!(debug_assertions) {
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "invalid_rule_configuration");
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("panicked"));
    } else {
        assert!(findings.is_empty());
    }
}
