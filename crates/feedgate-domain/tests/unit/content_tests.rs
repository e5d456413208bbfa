//! Tests for the content entity

use feedgate_domain::{Content, ContentId};
use serde_json::json;

#[test]
fn test_lengths_count_characters_not_bytes() {
    let content = Content::new("Café", "naïve résumé", "a", "b");
    assert_eq!(content.title_length(), 4);
    assert_eq!(content.body_length(), 12);
}

#[test]
fn test_field_lookup_falls_back_to_metadata() {
    let content = Content::new("t", "b", "Jane", "news").with_metadata("source", "wire");
    assert_eq!(content.field("author"), Some(json!("Jane")));
    assert_eq!(content.field("source"), Some(json!("wire")));
    assert_eq!(content.field("missing"), None);
    assert_eq!(content.field("thumbnail"), None);
}

#[test]
fn test_blank_thumbnail_is_not_a_thumbnail() {
    let content = Content::new("t", "b", "a", "c").with_thumbnail("   ");
    assert!(!content.has_thumbnail());
    assert!(Content::new("t", "b", "a", "c")
        .with_thumbnail("https://cdn.example.com/a.jpg")
        .has_thumbnail());
}

#[test]
fn test_deserializes_original_article_payload() {
    let content: Content = serde_json::from_value(json!({
        "id": 12,
        "title": "Headline",
        "body": "Text",
        "author": "Jane",
        "category": "technology",
        "thumbnail_url": "https://cdn.example.com/t.png",
        "metadata": { "region": "eu" }
    }))
    .expect("article should deserialize");

    assert_eq!(content.id, Some(ContentId(12)));
    assert_eq!(content.thumbnail.as_deref(), Some("https://cdn.example.com/t.png"));
    assert_eq!(content.metadata.get("region"), Some(&json!("eu")));
}
