//! Tests for authored rules and validator type tags

use feedgate_domain::{FeedBrand, FeedId, Severity, ValidatorRule, ValidatorType};
use serde_json::json;

#[test]
fn test_validator_type_round_trips_known_tags() {
    for tag in ValidatorType::SUPPORTED {
        let name = tag.as_str().to_string();
        assert_eq!(ValidatorType::from(name.clone()), tag);
    }
}

#[test]
fn test_unknown_tag_is_preserved() {
    let tag = ValidatorType::from("sentiment");
    assert_eq!(tag, ValidatorType::Unsupported("sentiment".to_string()));
    assert_eq!(tag.to_string(), "sentiment");
}

#[test]
fn test_rule_deserializes_persisted_shape() {
    let rule: ValidatorRule = serde_json::from_value(json!({
        "id": 3,
        "name": "No gambling",
        "description": "Blocks gambling content",
        "feed_id": 1,
        "validator_type": "prohibited_content",
        "configuration": { "keywords": ["gambling"] },
        "is_active": false,
        "severity": "warning"
    }))
    .expect("rule should deserialize");

    assert_eq!(rule.validator_type, ValidatorType::ProhibitedContent);
    assert_eq!(rule.severity, Severity::Warning);
    assert!(!rule.active);
    assert!(!rule.applies_to(FeedId(1)));
}

#[test]
fn test_applies_to_requires_owner_and_active() {
    let rule = ValidatorRule::new("r", 1, "length", json!({}));
    assert!(rule.applies_to(FeedId(1)));
    assert!(!rule.applies_to(FeedId(2)));
}

#[test]
fn test_feed_brand_detection() {
    assert_eq!(FeedBrand::from_feed_type("MSN"), Some(FeedBrand::Msn));
    assert_eq!(FeedBrand::from_feed_type(" Google News "), Some(FeedBrand::GoogleNews));
    assert_eq!(FeedBrand::from_feed_type("apple_news"), Some(FeedBrand::AppleNews));
    assert_eq!(FeedBrand::from_feed_type("rss"), None);
}
