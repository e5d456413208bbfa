//! Identifier value objects
//!
//! Strongly typed wrappers around the numeric identifiers the persistence
//! layer assigns, plus the composite cache key and the audit id.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identity of a stored article
    ContentId
);
numeric_id!(
    /// Identity of a distribution feed
    FeedId
);
numeric_id!(
    /// Identity of an authored validator rule
    RuleId
);

/// Composite key identifying one (content, feed) evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerdictKey {
    /// Evaluated content
    pub content_id: ContentId,
    /// Target feed
    pub feed_id: FeedId,
}

impl VerdictKey {
    /// Build a key from its two halves
    pub fn new(content_id: ContentId, feed_id: FeedId) -> Self {
        Self {
            content_id,
            feed_id,
        }
    }
}

impl fmt::Display for VerdictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.content_id, self.feed_id)
    }
}

/// Opaque audit-correlation identifier minted per evaluation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditId(String);

impl AuditId {
    /// Wrap an already minted identifier
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
