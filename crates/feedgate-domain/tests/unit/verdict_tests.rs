//! Tests for verdict construction

use chrono::{TimeZone, Utc};
use feedgate_domain::{
    AuditId, ComplianceVerdict, FeedId, Finding, FindingOrigin, Severity, VerdictStamp,
};

fn stamp() -> VerdictStamp {
    VerdictStamp {
        audit_id: AuditId::new("audit-1"),
        content_id: None,
        feed_id: FeedId(1),
        evaluated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_partition_preserves_order_and_sets_passed() {
    let findings = vec![
        Finding::new("a", "first"),
        Finding::new("w", "advice").with_severity(Severity::Warning),
        Finding::new("b", "second"),
    ];
    let verdict = ComplianceVerdict::from_findings(findings, stamp());

    assert!(!verdict.passed());
    let rules: Vec<_> = verdict.errors().iter().map(|f| f.rule.as_str()).collect();
    assert_eq!(rules, vec!["a", "b"]);
    assert_eq!(verdict.warnings().len(), 1);
}

#[test]
fn test_warnings_only_still_passes() {
    let findings = vec![Finding::new("w", "advice").with_severity(Severity::Warning)];
    let verdict = ComplianceVerdict::from_findings(findings, stamp());
    assert!(verdict.passed());
    assert!(verdict.clone().without_warnings().passed());
}

#[test]
fn test_fault_verdict_has_single_error() {
    let verdict = ComplianceVerdict::fault("rule store offline", stamp());
    assert!(!verdict.passed());
    assert_eq!(verdict.errors().len(), 1);
    assert_eq!(verdict.errors()[0].rule, "evaluation_fault");
    assert_eq!(verdict.errors()[0].origin, FindingOrigin::Evaluator);
}

#[test]
fn test_same_outcome_ignores_audit_id() {
    let a = ComplianceVerdict::from_findings(vec![Finding::new("a", "x")], stamp());
    let mut other = stamp();
    other.audit_id = AuditId::new("audit-2");
    let b = ComplianceVerdict::from_findings(vec![Finding::new("a", "x")], other);
    assert!(a.same_outcome(&b));
    assert_ne!(a, b);
}
