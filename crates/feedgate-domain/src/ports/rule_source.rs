//! Rule Source Port
//!
//! Supplies the authored validator rules owned by a feed. The evaluator never
//! mutates rules; it filters out inactive ones itself.

use crate::entities::ValidatorRule;
use crate::error::Result;
use crate::value_objects::FeedId;

/// Read-only access to authored rules
pub trait RuleSource: Send + Sync {
    /// Rules bound to `feed_id`, in definition order
    fn rules_for_feed(&self, feed_id: FeedId) -> Result<Vec<ValidatorRule>>;
}
