//! The `check` command
//!
//! Evaluates a bundle's article against its feeds and renders the report.

use std::sync::Arc;

use clap::ValueEnum;
use feedgate_domain::{FeedId, Result};
use feedgate_infrastructure::{EvaluationConfig, EvaluatorFactory};
use feedgate_validate::{BatchReport, Reporter};
use tracing::info;

use crate::bundle::EvaluationBundle;

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Plain-text listing
    #[default]
    Human,
}

/// Evaluate the bundle's article against every feed, or only `feed`
pub fn run_check(
    bundle: &EvaluationBundle,
    feed: Option<FeedId>,
    config: &EvaluationConfig,
) -> Result<BatchReport> {
    let feeds = bundle.select_feeds(feed)?;
    let evaluator = EvaluatorFactory::from_config(config, Arc::new(bundle.rule_source()));

    let verdicts = evaluator.evaluate_many(&bundle.content, &feeds);
    let report = BatchReport::new(verdicts);
    info!(
        feeds = report.summary.total,
        failed = report.summary.failed,
        "Bundle evaluated"
    );
    Ok(report)
}

/// Render a report in the requested format
pub fn render(report: &BatchReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => Reporter::to_json(report),
        OutputFormat::Human => Reporter::to_human_readable(report),
    }
}
