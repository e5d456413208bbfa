//! Content under evaluation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::ContentId;

/// An article submitted for publication
///
/// Evaluation only ever borrows a `Content`; nothing in the engine mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Persisted identity; absent for drafts that were never saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContentId>,
    /// Headline
    #[serde(default)]
    pub title: String,
    /// Article text
    #[serde(default)]
    pub body: String,
    /// Byline
    #[serde(default)]
    pub author: String,
    /// Editorial category
    #[serde(default)]
    pub category: String,
    /// Thumbnail URL or asset identifier
    #[serde(default, alias = "thumbnail_url", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Free-form metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Content {
    /// Create a draft with the four core text fields
    pub fn new<T, B, A, C>(title: T, body: B, author: A, category: C) -> Self
    where
        T: Into<String>,
        B: Into<String>,
        A: Into<String>,
        C: Into<String>,
    {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author: author.into(),
            category: category.into(),
            thumbnail: None,
            metadata: Map::new(),
        }
    }

    /// Set the persisted identity
    pub fn with_id<I: Into<ContentId>>(mut self, id: I) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the thumbnail reference
    pub fn with_thumbnail<S: Into<String>>(mut self, thumbnail: S) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Insert one metadata entry
    pub fn with_metadata<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Title length in characters
    pub fn title_length(&self) -> usize {
        self.title.chars().count()
    }

    /// Body length in characters
    pub fn body_length(&self) -> usize {
        self.body.chars().count()
    }

    /// Whether a non-blank thumbnail reference is present
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Look up a field by name
    ///
    /// Core fields (`title`, `body`, `author`, `category`, `thumbnail`) are
    /// read from the struct; any other name falls back to the metadata map.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(Value::String(self.title.clone())),
            "body" => Some(Value::String(self.body.clone())),
            "author" => Some(Value::String(self.author.clone())),
            "category" => Some(Value::String(self.category.clone())),
            "thumbnail" | "thumbnail_url" => self.thumbnail.clone().map(Value::String),
            other => self.metadata.get(other).cloned(),
        }
    }

    /// Title and body joined by a single space
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}
