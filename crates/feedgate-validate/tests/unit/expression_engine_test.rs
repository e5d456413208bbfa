//! Tests for the expression engine

use feedgate_domain::Content;
use feedgate_validate::ExpressionEngine;

fn article() -> Content {
    Content::new("Ten tips", "one two three four", "Ana", "sports")
        .with_metadata("region", "emea")
        .with_metadata("priority", 3)
}

#[test]
fn test_length_and_word_variables() {
    let engine = ExpressionEngine::new();
    let content = article();

    assert!(engine.evaluate_expression("title_length == 8", &content).unwrap());
    assert!(engine.evaluate_expression("word_count == 4", &content).unwrap());
    assert!(!engine.evaluate_expression("body_length > 100", &content).unwrap());
}

#[test]
fn test_string_and_boolean_variables() {
    let engine = ExpressionEngine::new();
    let content = article();

    assert!(
        engine
            .evaluate_expression("category == \"sports\" && has_thumbnail == false", &content)
            .unwrap()
    );
    assert!(engine.evaluate_expression("thumbnail == \"\"", &content).unwrap());
}

#[test]
fn test_metadata_variables_are_prefixed() {
    let engine = ExpressionEngine::new();
    let content = article();

    assert!(engine.evaluate_expression("meta_region == \"emea\"", &content).unwrap());
    assert!(engine.evaluate_expression("meta_priority >= 3", &content).unwrap());
}

#[test]
fn test_structured_metadata_is_not_exposed() {
    let engine = ExpressionEngine::new();
    let content = article().with_metadata("tags", serde_json::json!(["a", "b"]));

    assert!(engine.evaluate_expression("meta_tags == \"a\"", &content).is_err());
    assert!(engine.evaluate_expression("meta_region == \"emea\"", &content).unwrap());
}

#[test]
fn test_invalid_expression() {
    let engine = ExpressionEngine::new();
    let content = article();

    assert!(engine.evaluate_expression("undefined_var > 0", &content).is_err());
    assert!(engine.evaluate_expression("title_length +", &content).is_err());
    // Non-boolean result
    assert!(engine.evaluate_expression("title_length", &content).is_err());
}
