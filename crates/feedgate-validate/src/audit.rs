//! Audit stamping
//!
//! Clocks and audit-id generators injected into the evaluator. Audit ids only
//! need to be unique per evaluation; they are not secrets.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use feedgate_domain::{AuditId, AuditIdGenerator, Clock};
use rand::Rng;
use rand::distr::Alphanumeric;

/// Default audit id prefix
pub const DEFAULT_AUDIT_PREFIX: &str = "audit";

const RANDOM_SUFFIX_LEN: usize = 9;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `<prefix>-<unix millis>-<9 lowercase alphanumerics>`
#[derive(Debug, Clone)]
pub struct TimestampAuditIds {
    prefix: String,
}

impl TimestampAuditIds {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for TimestampAuditIds {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_PREFIX)
    }
}

impl AuditIdGenerator for TimestampAuditIds {
    fn mint(&self, at: DateTime<Utc>) -> AuditId {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        AuditId::new(format!(
            "{}-{}-{suffix}",
            self.prefix,
            at.timestamp_millis()
        ))
    }
}

/// Deterministic ids `<prefix>-1`, `<prefix>-2`, ... for tests and replays
#[derive(Debug)]
pub struct SequentialAuditIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialAuditIds {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl AuditIdGenerator for SequentialAuditIds {
    fn mint(&self, _at: DateTime<Utc>) -> AuditId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        AuditId::new(format!("{}-{n}", self.prefix))
    }
}
