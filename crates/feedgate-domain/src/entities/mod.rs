//! Domain entities
//!
//! The records supplied by the persistence collaborator: articles, feeds and
//! authored rules.

pub mod content;
pub mod feed;
pub mod rule;

pub use content::Content;
pub use feed::{Feed, FeedBrand};
pub use rule::{ValidatorRule, ValidatorType};
