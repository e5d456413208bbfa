//! Value objects
//!
//! Immutable records produced by an evaluation: identifiers, findings and
//! verdicts.

pub mod finding;
pub mod ids;
pub mod verdict;

pub use finding::{Finding, FindingOrigin, Severity};
pub use ids::{AuditId, ContentId, FeedId, RuleId, VerdictKey};
pub use verdict::{ComplianceVerdict, VerdictStamp};
