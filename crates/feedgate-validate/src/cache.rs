//! In-memory verdict cache

use dashmap::DashMap;
use feedgate_domain::{ComplianceVerdict, VerdictCache, VerdictKey};

/// Concurrent map of verdicts keyed by (content, feed); last write wins
#[derive(Debug, Default)]
pub struct InMemoryVerdictCache {
    verdicts: DashMap<VerdictKey, ComplianceVerdict>,
}

impl InMemoryVerdictCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VerdictCache for InMemoryVerdictCache {
    fn get(&self, key: &VerdictKey) -> Option<ComplianceVerdict> {
        self.verdicts.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: VerdictKey, verdict: ComplianceVerdict) {
        self.verdicts.insert(key, verdict);
    }

    fn invalidate(&self, key: &VerdictKey) {
        self.verdicts.remove(key);
    }

    fn clear(&self) {
        self.verdicts.clear();
    }

    fn len(&self) -> usize {
        self.verdicts.len()
    }
}
