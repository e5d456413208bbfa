//! Evaluation bundles
//!
//! A bundle is the JSON document handed to the CLI: one article, the feeds to
//! check it against and the rules authored for those feeds.
//!
//! ```json
//! {
//!   "content": { "id": 7, "title": "...", "body": "...", "author": "...", "category": "news" },
//!   "feeds": [ { "id": 1, "name": "MSN", "type": "msn", "guidelines": {} } ],
//!   "rules": [ { "name": "...", "feed_id": 1, "validator_type": "length", "configuration": {} } ]
//! }
//! ```

use std::path::Path;

use feedgate_domain::{Content, Error, Feed, FeedId, Result, ValidatorRule};
use feedgate_infrastructure::ErrorContext;
use feedgate_validate::InMemoryRuleSource;
use serde::{Deserialize, Serialize};

/// Article, feeds and authored rules for one evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBundle {
    /// Article under evaluation
    pub content: Content,
    /// Target feeds
    #[serde(default)]
    pub feeds: Vec<Feed>,
    /// Authored rules of any of the feeds
    #[serde(default)]
    pub rules: Vec<ValidatorRule>,
}

impl EvaluationBundle {
    /// Parse a bundle from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a bundle file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .io_context(format!("Failed to read bundle {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Rule source over the bundled rules
    pub fn rule_source(&self) -> InMemoryRuleSource {
        InMemoryRuleSource::from_rules(self.rules.iter().cloned())
    }

    /// All feeds, or only the one requested
    pub fn select_feeds(&self, feed_id: Option<FeedId>) -> Result<Vec<Feed>> {
        match feed_id {
            None => Ok(self.feeds.clone()),
            Some(id) => self
                .feeds
                .iter()
                .find(|feed| feed.id == id)
                .cloned()
                .map(|feed| vec![feed])
                .ok_or_else(|| Error::not_found(format!("feed {id} in bundle"))),
        }
    }
}
