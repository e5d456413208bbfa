//! Bundle loading tests

use std::io::Write;

use feedgate::{ContentId, Error, EvaluationBundle, FeedId, RuleSource, ValidatorType};

pub const BUNDLE: &str = r#"{
    "content": {
        "id": 7,
        "title": "Ten ways to save on groceries",
        "body": "Plan meals ahead and compare unit prices before you shop.",
        "author": "Kim Park",
        "category": "lifestyle",
        "thumbnail_url": "https://img.example.com/cart.jpg",
        "metadata": { "region": "us" }
    },
    "feeds": [
        {
            "id": 1,
            "name": "Partner",
            "type": "partner",
            "is_active": true,
            "guidelines": {
                "title_max_length": 100,
                "prohibited_topics": ["casino"],
                "api_specifications": { "content_min_length": 20 }
            }
        },
        { "id": 2, "name": "Strict", "type": "partner", "guidelines": { "title_max_length": 10 } }
    ],
    "rules": [
        {
            "id": 3,
            "name": "Needs region",
            "feed_id": 1,
            "validator_type": "metadata",
            "configuration": { "required_fields": ["region"] },
            "is_active": true,
            "severity": "error"
        }
    ]
}"#;

#[test]
fn test_original_field_names_are_accepted() {
    let bundle = EvaluationBundle::from_json(BUNDLE).expect("bundle parses");

    assert!(bundle.content.has_thumbnail());
    assert_eq!(bundle.feeds.len(), 2);
    let guidelines = bundle.feeds[0].guidelines.resolve();
    assert_eq!(guidelines.prohibited_terms, vec!["casino".to_string()]);
    assert_eq!(guidelines.body.min, Some(20));
    assert_eq!(bundle.rules[0].validator_type, ValidatorType::Metadata);
}

#[test]
fn test_rule_source_groups_rules_by_feed() {
    let bundle = EvaluationBundle::from_json(BUNDLE).expect("bundle parses");
    let source = bundle.rule_source();

    assert_eq!(source.rules_for_feed(FeedId(1)).unwrap().len(), 1);
    assert!(source.rules_for_feed(FeedId(2)).unwrap().is_empty());
}

#[test]
fn test_select_feeds() {
    let bundle = EvaluationBundle::from_json(BUNDLE).expect("bundle parses");

    assert_eq!(bundle.select_feeds(None).unwrap().len(), 2);
    let only = bundle.select_feeds(Some(FeedId(2))).unwrap();
    assert_eq!(only[0].name, "Strict");
    assert!(matches!(
        bundle.select_feeds(Some(FeedId(99))),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(BUNDLE.as_bytes()).expect("write bundle");

    let bundle = EvaluationBundle::from_path(file.path()).expect("bundle loads");
    assert_eq!(bundle.content.id, Some(ContentId(7)));
}

#[test]
fn test_bad_input_is_reported() {
    assert!(matches!(
        EvaluationBundle::from_json("{ \"feeds\": [] }"),
        Err(Error::Json { .. })
    ));
    assert!(matches!(
        EvaluationBundle::from_path("/nonexistent/bundle.json"),
        Err(Error::Io { .. })
    ));
}
