//! Audit stamping ports
//!
//! Injected so tests can pin audit ids and timestamps.

use chrono::{DateTime, Utc};

use crate::value_objects::AuditId;

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Mints one audit-correlation id per evaluation
///
/// Ids must be unique per call; they need not be unguessable.
pub trait AuditIdGenerator: Send + Sync {
    /// Mint a fresh id for an evaluation starting at `at`
    fn mint(&self, at: DateTime<Utc>) -> AuditId;
}
