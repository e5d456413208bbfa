//! Compliance Report Generation
//!
//! Summarises the verdicts of one batch evaluation and renders them:
//! - JSON for machine consumers
//! - Human-readable listing for terminal output

use std::fmt::Write;

use feedgate_domain::{ComplianceVerdict, Finding};
use serde::{Deserialize, Serialize};

/// Verdicts of a batch plus their summary
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Summary statistics
    pub summary: BatchSummary,
    /// One verdict per evaluated feed, in evaluation order
    pub verdicts: Vec<ComplianceVerdict>,
}

/// Summary of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of verdicts
    pub total: usize,
    /// Verdicts that passed
    pub passed: usize,
    /// Verdicts that failed
    pub failed: usize,
    /// Error findings across all verdicts
    pub error_count: usize,
    /// Warning findings across all verdicts
    pub warning_count: usize,
}

impl BatchSummary {
    /// Tally a set of verdicts
    pub fn from_verdicts(verdicts: &[ComplianceVerdict]) -> Self {
        let passed = verdicts.iter().filter(|v| v.passed()).count();
        Self {
            total: verdicts.len(),
            passed,
            failed: verdicts.len() - passed,
            error_count: verdicts.iter().map(|v| v.errors().len()).sum(),
            warning_count: verdicts.iter().map(|v| v.warnings().len()).sum(),
        }
    }
}

impl BatchReport {
    pub fn new(verdicts: Vec<ComplianceVerdict>) -> Self {
        Self {
            summary: BatchSummary::from_verdicts(&verdicts),
            verdicts,
        }
    }

    /// Whether every verdict passed; an empty batch passes
    pub fn passed(&self) -> bool {
        self.summary.failed == 0
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &BatchReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &BatchReport) -> String {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("=== Compliance Report ===\n\n");
        output.push_str("--- Summary ---\n");
        let _ = writeln!(output, "Feeds evaluated: {}", summary.total);
        let _ = writeln!(output, "  Passed:   {}", summary.passed);
        let _ = writeln!(output, "  Failed:   {}", summary.failed);
        let _ = writeln!(output, "  Errors:   {}", summary.error_count);
        let _ = writeln!(output, "  Warnings: {}", summary.warning_count);

        for verdict in &report.verdicts {
            let status = if verdict.passed() { "PASSED" } else { "FAILED" };
            let _ = writeln!(
                output,
                "\n--- Feed {}: {status} ({}) ---",
                verdict.feed_id(),
                verdict.audit_id()
            );
            write_findings(&mut output, "error", verdict.errors());
            write_findings(&mut output, "warning", verdict.warnings());
        }

        output.push('\n');
        if report.passed() {
            output.push_str("Result: all feeds accept the article\n");
        } else {
            let _ = writeln!(
                output,
                "Result: rejected by {} of {} feeds",
                summary.failed, summary.total
            );
        }
        output
    }
}

fn write_findings(output: &mut String, label: &str, findings: &[Finding]) {
    for finding in findings {
        let _ = writeln!(output, "  [{label}] {finding}");
    }
}
