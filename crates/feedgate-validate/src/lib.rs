//! Content compliance validation
//!
//! Checks an article against a feed's publishing guidelines, the feed
//! brand's built-in bundle and the rules authored for that feed, producing
//! a [`ComplianceVerdict`](feedgate_domain::ComplianceVerdict) of errors and
//! warnings.
//!
//! # Layout
//!
//! - [`validators`]: pure guideline checks (length, required fields,
//!   prohibited content, category, thumbnail, metadata)
//! - [`brands`]: MSN, Google News and Apple News bundles behind a registry
//! - [`rules`]: authored rule configurations, dispatch and catalog
//! - [`engines`]: boolean expressions for `custom` rules
//! - [`evaluator`]: the orchestrating [`ComplianceEvaluator`]
//! - [`reporter`]: batch summaries in JSON or plain text

pub mod audit;
pub mod brands;
pub mod cache;
pub mod engines;
pub mod error;
pub mod evaluator;
pub mod reporter;
pub mod rules;
pub mod source;
pub mod validators;

pub use audit::{FixedClock, SequentialAuditIds, SystemClock, TimestampAuditIds};
pub use brands::{BrandProfile, BrandRegistry, NoopProfile};
pub use cache::InMemoryVerdictCache;
pub use engines::ExpressionEngine;
pub use error::RuleConfigError;
pub use evaluator::ComplianceEvaluator;
pub use reporter::{BatchReport, BatchSummary, Reporter};
pub use rules::{RuleCheck, RuleDispatcher, ValidatorDescriptor, validator_catalog};
pub use source::InMemoryRuleSource;
pub use validators::check_guidelines;
