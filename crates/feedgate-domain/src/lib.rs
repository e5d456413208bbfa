//! Domain layer for feedgate
//!
//! Content-compliance data model: the article under evaluation, the feed and
//! its guideline set, user-authored validator rules, and the findings and
//! verdicts an evaluation produces. The crate holds no behaviour beyond
//! guideline resolution and verdict construction; the checks themselves live
//! in `feedgate-validate`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod guideline;
pub mod ports;
pub mod value_objects;

pub use entities::{Content, Feed, FeedBrand, ValidatorRule, ValidatorType};
pub use error::{Error, Result};
pub use guideline::{ApiSpecification, EffectiveGuideline, GuidelineSet, LengthBounds};
pub use ports::{AuditIdGenerator, Clock, RuleSource, VerdictCache};
pub use value_objects::{
    AuditId, ComplianceVerdict, ContentId, FeedId, Finding, FindingOrigin, RuleId, Severity,
    VerdictKey, VerdictStamp,
};
