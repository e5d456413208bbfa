//! Verdict Cache Port
//!
//! Keyed by the composite (content, feed) identity. A verdict is a pure
//! function of its inputs, so concurrent writers to one key may simply
//! overwrite each other.

use crate::value_objects::{ComplianceVerdict, VerdictKey};

/// Shared store of previously computed verdicts
pub trait VerdictCache: Send + Sync {
    /// Cached verdict for the key, if any
    fn get(&self, key: &VerdictKey) -> Option<ComplianceVerdict>;

    /// Store a verdict, replacing any previous one
    fn put(&self, key: VerdictKey, verdict: ComplianceVerdict);

    /// Forget the verdict for one key
    fn invalidate(&self, key: &VerdictKey);

    /// Forget everything
    fn clear(&self);

    /// Number of cached verdicts
    fn len(&self) -> usize;

    /// Whether the cache holds no verdicts
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
