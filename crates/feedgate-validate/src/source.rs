//! In-memory rule source

use dashmap::DashMap;
use feedgate_domain::{FeedId, Result, RuleSource, ValidatorRule};

/// Rules grouped by owning feed, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryRuleSource {
    rules: DashMap<FeedId, Vec<ValidatorRule>>,
}

impl InMemoryRuleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat rule list, keeping definition order per feed
    pub fn from_rules<I: IntoIterator<Item = ValidatorRule>>(rules: I) -> Self {
        let source = Self::new();
        for rule in rules {
            source.add(rule);
        }
        source
    }

    /// Append a rule to its feed
    pub fn add(&self, rule: ValidatorRule) {
        self.rules.entry(rule.feed_id).or_default().push(rule);
    }

    /// Total rule count
    pub fn len(&self) -> usize {
        self.rules.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleSource for InMemoryRuleSource {
    fn rules_for_feed(&self, feed_id: FeedId) -> Result<Vec<ValidatorRule>> {
        Ok(self
            .rules
            .get(&feed_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
