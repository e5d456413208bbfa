//! Shared fixtures

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use feedgate_domain::{
    Content, Error, Feed, FeedId, GuidelineSet, Result, RuleSource, ValidatorRule,
};
use feedgate_validate::{ComplianceEvaluator, FixedClock, InMemoryRuleSource, SequentialAuditIds};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

/// Evaluator with deterministic audit ids and clock
pub fn evaluator_with(source: Arc<dyn RuleSource>) -> ComplianceEvaluator {
    ComplianceEvaluator::new(source)
        .with_audit_ids(Arc::new(SequentialAuditIds::new("test")))
        .with_clock(Arc::new(FixedClock(fixed_time())))
}

pub fn evaluator(rules: Vec<ValidatorRule>) -> ComplianceEvaluator {
    evaluator_with(Arc::new(InMemoryRuleSource::from_rules(rules)))
}

/// Article satisfying every brand bundle and the default test guidelines
pub fn compliant_content() -> Content {
    Content::new(
        "City council approves new transit plan",
        "The council voted on Tuesday to fund three new bus lines. ".repeat(8),
        "Dana Ortiz",
        "business",
    )
    .with_id(42)
    .with_thumbnail("https://cdn.example.com/transit.jpg")
}

/// Feed without a brand profile
pub fn partner_feed(id: u64) -> Feed {
    Feed::new(id, format!("Partner {id}"), "partner")
}

pub fn feed_with(id: u64, guidelines: GuidelineSet) -> Feed {
    partner_feed(id).with_guidelines(guidelines)
}

/// Rule source that fails for one feed
pub struct FlakySource {
    pub failing: FeedId,
    pub inner: InMemoryRuleSource,
}

impl RuleSource for FlakySource {
    fn rules_for_feed(&self, feed_id: FeedId) -> Result<Vec<ValidatorRule>> {
        if feed_id == self.failing {
            return Err(Error::rule_source("rule store unavailable"));
        }
        self.inner.rules_for_feed(feed_id)
    }
}
