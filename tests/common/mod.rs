//! Shared fixtures for engine tests: presentation trees built from the same
//! JSON shapes the remote service returns.

use deckhand::google::types::Presentation;

pub fn presentation_from_json(value: serde_json::Value) -> Presentation {
    serde_json::from_value(value).expect("presentation fixture")
}

/// A slide with one shape whose text runs are the given strings.
pub fn text_slide(object_id: &str, runs: &[&str]) -> serde_json::Value {
    let text_elements: Vec<serde_json::Value> = runs
        .iter()
        .map(|run| serde_json::json!({"textRun": {"content": run}}))
        .collect();
    serde_json::json!({
        "objectId": object_id,
        "pageElements": [
            {"objectId": format!("{object_id}_shape"), "shape": {"text": {"textElements": text_elements}}}
        ]
    })
}

/// A presentation whose slides each hold one shape with the given runs.
pub fn presentation_of(slides: &[(&str, &[&str])]) -> Presentation {
    let slides: Vec<serde_json::Value> = slides
        .iter()
        .map(|(object_id, runs)| text_slide(object_id, runs))
        .collect();
    presentation_from_json(serde_json::json!({
        "presentationId": "fixture",
        "slides": slides
    }))
}
