//! Compliance verdicts

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::finding::{Finding, FindingOrigin, Severity};
use super::ids::{AuditId, ContentId, FeedId};
use crate::constants::RULE_EVALUATION_FAULT;

/// Aggregate result of evaluating one content against one feed
///
/// `passed` always equals `errors.is_empty()`; the fields are private so the
/// invariant cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceVerdict {
    passed: bool,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    audit_id: AuditId,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_id: Option<ContentId>,
    feed_id: FeedId,
    evaluated_at: DateTime<Utc>,
}

/// Where and when a verdict was produced
#[derive(Debug, Clone)]
pub struct VerdictStamp {
    /// Freshly minted audit id
    pub audit_id: AuditId,
    /// Evaluated content, if it has been persisted
    pub content_id: Option<ContentId>,
    /// Target feed
    pub feed_id: FeedId,
    /// Evaluation time
    pub evaluated_at: DateTime<Utc>,
}

impl ComplianceVerdict {
    /// Partition findings by severity, keeping their relative order
    pub fn from_findings<I>(findings: I, stamp: VerdictStamp) -> Self
    where
        I: IntoIterator<Item = Finding>,
    {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            findings.into_iter().partition(Finding::is_error);

        Self {
            passed: errors.is_empty(),
            errors,
            warnings,
            audit_id: stamp.audit_id,
            content_id: stamp.content_id,
            feed_id: stamp.feed_id,
            evaluated_at: stamp.evaluated_at,
        }
    }

    /// Verdict standing in for an evaluation that could not run
    pub fn fault<S: Into<String>>(message: S, stamp: VerdictStamp) -> Self {
        let finding = Finding::new(RULE_EVALUATION_FAULT, message)
            .with_severity(Severity::Error)
            .with_origin(FindingOrigin::Evaluator);
        Self::from_findings([finding], stamp)
    }

    /// True when no error finding was reported
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Blocking findings, in evaluation order
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Advisory findings, in evaluation order
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Audit-correlation id
    pub fn audit_id(&self) -> &AuditId {
        &self.audit_id
    }

    /// Evaluated content id, if any
    pub fn content_id(&self) -> Option<ContentId> {
        self.content_id
    }

    /// Target feed id
    pub fn feed_id(&self) -> FeedId {
        self.feed_id
    }

    /// Evaluation timestamp
    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }

    /// Same outcome, ignoring audit id and timestamp
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.passed == other.passed && self.errors == other.errors && self.warnings == other.warnings
    }

    /// Drop all warnings; `passed` is unaffected by construction
    pub fn without_warnings(mut self) -> Self {
        self.warnings.clear();
        self
    }
}
