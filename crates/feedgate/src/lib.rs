//! # feedgate
//!
//! Decides whether an article may be published to a distribution feed.
//!
//! An evaluation checks the article against the feed's guideline set, the
//! built-in bundle of the feed's brand (MSN, Google News, Apple News) and the
//! rules authored for the feed, and returns a verdict listing errors, which
//! block publication, and warnings, which do not.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use feedgate::{ComplianceEvaluator, Content, Feed, InMemoryRuleSource};
//!
//! let evaluator = ComplianceEvaluator::new(Arc::new(InMemoryRuleSource::new()));
//! let article = Content::new("Title", "Body", "Author", "news");
//! let verdict = evaluator.evaluate(&article, &Feed::new(1, "MSN", "msn"));
//! assert!(!verdict.passed());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - data model, findings, verdicts, ports and the error type
//! - `validate` - validators, brand profiles, rule dispatch, evaluator
//! - `infrastructure` - configuration, logging, evaluator bootstrap

pub mod bundle;
pub mod check;

/// Domain layer - data model and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use feedgate_domain::*;
}

/// Validation layer - checks and evaluation
///
/// Re-exports from the validation crate for convenience
pub mod validate {
    pub use feedgate_validate::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use feedgate_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use bundle::EvaluationBundle;
pub use check::{OutputFormat, render, run_check};
pub use domain::*;
pub use validate::{
    BatchReport, ComplianceEvaluator, InMemoryRuleSource, InMemoryVerdictCache, Reporter,
    validator_catalog,
};
