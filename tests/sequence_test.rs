//! Duplication/reorder engine tests over the pure planning functions.

use std::collections::BTreeMap;

use deckhand::google::types::Request;
use deckhand::sequence::{plan_legacy_counts, plan_sequence};

mod common;
use common::presentation_of;

fn wire(requests: &[Request]) -> Vec<serde_json::Value> {
    serde_json::to_value(requests)
        .expect("serialize requests")
        .as_array()
        .expect("request array")
        .clone()
}

#[test]
fn legacy_count_zero_emits_exactly_one_delete() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"]), ("s2", &["c"])]);
    let counts = BTreeMap::from([(0usize, 0u32)]);
    let ops = wire(&plan_legacy_counts(&presentation.slides, &counts));

    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0]["deleteObject"]["objectId"], "s0");
}

#[test]
fn legacy_counts_duplicate_count_minus_one_times() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"])]);
    let counts = BTreeMap::from([(0usize, 3u32), (1usize, 1u32)]);
    let ops = wire(&plan_legacy_counts(&presentation.slides, &counts));

    // count 3 => two adjacent duplicates, count 1 => untouched.
    assert_eq!(ops.len(), 2);
    for op in &ops {
        assert_eq!(op["duplicateObject"]["objectId"], "s0");
    }
}

#[test]
fn legacy_counts_mix_duplicates_before_deletes_in_one_batch() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"]), ("s2", &["c"])]);
    let counts = BTreeMap::from([(0usize, 0u32), (2usize, 2u32)]);
    let ops = wire(&plan_legacy_counts(&presentation.slides, &counts));

    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0]["duplicateObject"]["objectId"], "s2");
    assert_eq!(ops[1]["deleteObject"]["objectId"], "s0");
}

#[test]
fn legacy_counts_ignore_out_of_range_indices() {
    let presentation = presentation_of(&[("s0", &["a"])]);
    let counts = BTreeMap::from([(7usize, 0u32), (9usize, 4u32)]);
    assert!(plan_legacy_counts(&presentation.slides, &counts).is_empty());
}

#[test]
fn sequence_rebuild_duplicates_deletes_and_repositions() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"]), ("s2", &["c"])]);
    let plan = plan_sequence(&presentation.slides, &[2, 0, 0]);

    // One duplicate per entry, each with a fresh id mapped from its source.
    assert_eq!(plan.new_ids.len(), 3);
    let duplicates = wire(&plan.duplicates);
    let sources: Vec<&str> = duplicates
        .iter()
        .map(|op| op["duplicateObject"]["objectId"].as_str().expect("source id"))
        .collect();
    assert_eq!(sources, vec!["s2", "s0", "s0"]);
    for (op, new_id) in duplicates.iter().zip(&plan.new_ids) {
        let source = op["duplicateObject"]["objectId"].as_str().expect("source id");
        assert_eq!(op["duplicateObject"]["objectIds"][source], new_id.as_str());
    }

    // Fresh ids: pairwise distinct, none colliding with an original.
    for (i, a) in plan.new_ids.iter().enumerate() {
        assert!(a.starts_with("gen_slide_"));
        for b in &plan.new_ids[i + 1..] {
            assert_ne!(a, b);
        }
    }

    // Every original is deleted; duplicates are untouched by that batch.
    let deletes = wire(&plan.deletes);
    let deleted: Vec<&str> = deletes
        .iter()
        .map(|op| op["deleteObject"]["objectId"].as_str().expect("deleted id"))
        .collect();
    assert_eq!(deleted, vec!["s0", "s1", "s2"]);

    // Final order: requested order at consecutive positions 0..N-1.
    let repositions = wire(&plan.repositions);
    for (position, (op, new_id)) in repositions.iter().zip(&plan.new_ids).enumerate() {
        assert_eq!(op["updateSlidesPosition"]["slideObjectIds"][0], new_id.as_str());
        assert_eq!(
            op["updateSlidesPosition"]["insertionIndex"],
            serde_json::json!(position)
        );
    }
}

#[test]
fn sequence_skips_out_of_range_entries() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"])]);
    let plan = plan_sequence(&presentation.slides, &[1, 5, -1, 0]);

    assert_eq!(plan.new_ids.len(), 2);
    let duplicates = wire(&plan.duplicates);
    assert_eq!(duplicates[0]["duplicateObject"]["objectId"], "s1");
    assert_eq!(duplicates[1]["duplicateObject"]["objectId"], "s0");
    // Originals are still all deleted.
    assert_eq!(plan.deletes.len(), 2);
}

#[test]
fn empty_sequence_still_deletes_every_original() {
    let presentation = presentation_of(&[("s0", &["a"]), ("s1", &["b"])]);
    let plan = plan_sequence(&presentation.slides, &[]);

    assert!(plan.duplicates.is_empty());
    assert!(plan.repositions.is_empty());
    assert_eq!(plan.deletes.len(), 2);
}
