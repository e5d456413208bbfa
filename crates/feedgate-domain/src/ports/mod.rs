//! Domain ports
//!
//! Interfaces the evaluator needs from its collaborators. Implementations
//! live in `feedgate-validate` (in-memory) or in the embedding application.

pub mod audit;
pub mod rule_source;
pub mod verdict_cache;

pub use audit::{AuditIdGenerator, Clock};
pub use rule_source::RuleSource;
pub use verdict_cache::VerdictCache;
