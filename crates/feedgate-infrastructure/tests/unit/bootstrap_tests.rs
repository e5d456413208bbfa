//! Evaluator factory tests

use std::sync::Arc;

use feedgate_domain::{Content, ContentId, Feed};
use feedgate_infrastructure::config::EvaluationConfig;
use feedgate_infrastructure::EvaluatorFactory;
use feedgate_validate::InMemoryRuleSource;

fn msn_without_thumbnail() -> (Content, Feed) {
    let content = Content::new("Headline", "b".repeat(400), "Ana", "news").with_id(1);
    (content, Feed::new(1, "MSN", "msn"))
}

#[test]
fn test_defaults_enable_cache_and_brands() {
    let evaluator =
        EvaluatorFactory::from_config(&EvaluationConfig::default(), Arc::new(InMemoryRuleSource::new()));
    let (content, feed) = msn_without_thumbnail();

    let verdict = evaluator.evaluate(&content, &feed);

    assert!(!verdict.passed());
    assert!(verdict.audit_id().as_str().starts_with("audit-"));
    assert!(evaluator.cache().is_some());
    assert!(evaluator.cached_verdict(ContentId(1), feed.id).is_some());
}

#[test]
fn test_toggles_are_honoured() {
    let config = EvaluationConfig {
        brand_profiles_enabled: false,
        cache_enabled: false,
        audit_id_prefix: "gate".into(),
    };
    let evaluator = EvaluatorFactory::from_config(&config, Arc::new(InMemoryRuleSource::new()));
    let (content, feed) = msn_without_thumbnail();

    let verdict = evaluator.evaluate(&content, &feed);

    assert!(verdict.passed());
    assert!(verdict.audit_id().as_str().starts_with("gate-"));
    assert!(evaluator.cache().is_none());
}
