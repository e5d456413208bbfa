//! Check command tests

use feedgate::infrastructure::EvaluationConfig;
use feedgate::{EvaluationBundle, FeedId, OutputFormat, render, run_check};

use crate::bundle_tests::BUNDLE;

#[test]
fn test_check_reports_each_feed() {
    let bundle = EvaluationBundle::from_json(BUNDLE).unwrap();
    let report = run_check(&bundle, None, &EvaluationConfig::default()).unwrap();

    assert_eq!(report.summary.total, 2);
    assert!(report.verdicts[0].passed());
    assert!(!report.verdicts[1].passed());
    assert_eq!(report.verdicts[1].errors()[0].rule, "title_max_length");
    assert!(!report.passed());
}

#[test]
fn test_check_single_feed() {
    let bundle = EvaluationBundle::from_json(BUNDLE).unwrap();
    let report = run_check(&bundle, Some(FeedId(1)), &EvaluationConfig::default()).unwrap();

    assert_eq!(report.summary.total, 1);
    assert!(report.passed());
}

#[test]
fn test_check_unknown_feed_fails() {
    let bundle = EvaluationBundle::from_json(BUNDLE).unwrap();
    assert!(run_check(&bundle, Some(FeedId(5)), &EvaluationConfig::default()).is_err());
}

#[test]
fn test_render_formats() {
    let bundle = EvaluationBundle::from_json(BUNDLE).unwrap();
    let report = run_check(&bundle, None, &EvaluationConfig::default()).unwrap();

    let human = render(&report, OutputFormat::Human);
    assert!(human.contains("=== Compliance Report ==="));
    assert!(human.contains("--- Feed 2: FAILED"));

    let json: serde_json::Value = serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["verdicts"][1]["passed"], false);
}
