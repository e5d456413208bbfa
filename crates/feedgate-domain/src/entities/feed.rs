//! Distribution feeds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::guideline::GuidelineSet;
use crate::value_objects::FeedId;

/// Feed brands with a built-in compliance profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedBrand {
    /// MSN
    Msn,
    /// Google News
    GoogleNews,
    /// Apple News
    AppleNews,
}

impl FeedBrand {
    /// All brands with a profile
    pub const ALL: [FeedBrand; 3] = [Self::Msn, Self::GoogleNews, Self::AppleNews];

    /// Recognise a brand from a feed's free-text type, case-insensitively
    pub fn from_feed_type(feed_type: &str) -> Option<Self> {
        match feed_type.trim().to_lowercase().as_str() {
            "msn" => Some(Self::Msn),
            "google news" | "google_news" | "googlenews" => Some(Self::GoogleNews),
            "apple news" | "apple_news" | "applenews" => Some(Self::AppleNews),
            _ => None,
        }
    }
}

impl fmt::Display for FeedBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msn => write!(f, "MSN"),
            Self::GoogleNews => write!(f, "Google News"),
            Self::AppleNews => write!(f, "Apple News"),
        }
    }
}

/// A distribution target and its publishing guidelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Persisted identity
    pub id: FeedId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-text feed type; selects the brand profile
    #[serde(rename = "type", default)]
    pub feed_type: String,
    /// Publishing guidelines
    #[serde(default)]
    pub guidelines: GuidelineSet,
    /// Whether the feed accepts publications
    #[serde(default = "default_active", alias = "is_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Feed {
    /// Create an active feed with empty guidelines
    pub fn new<I, N, T>(id: I, name: N, feed_type: T) -> Self
    where
        I: Into<FeedId>,
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            feed_type: feed_type.into(),
            guidelines: GuidelineSet::default(),
            active: true,
        }
    }

    /// Replace the guideline set
    pub fn with_guidelines(mut self, guidelines: GuidelineSet) -> Self {
        self.guidelines = guidelines;
        self
    }

    /// Brand profile matching the feed type, if any
    pub fn brand(&self) -> Option<FeedBrand> {
        FeedBrand::from_feed_type(&self.feed_type)
    }
}
