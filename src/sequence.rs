//! Duplicating presentations and reshaping their slide sequence.
//!
//! Two intentionally different modes survive here: legacy per-index counts
//! (duplicates stay adjacent to their source, nothing is repositioned) and
//! the full sequence rebuild (duplicate, delete originals, reposition). They
//! are not unified; callers depend on both placements.

use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::errors::AppError;
use crate::google::client::GoogleContext;
use crate::google::types::{
    DeleteObject, DuplicateObject, Request, Slide, UpdateSlidesPosition,
};
use crate::resolve;

/// The three batches of a sequence rebuild. The remote service resolves each
/// batch against the document state at the start of that batch, so the
/// phases cannot be merged: duplicates must exist before the originals are
/// deleted, and repositioning needs the final set of objects in place.
#[derive(Debug)]
pub struct SequencePlan {
    pub duplicates: Vec<Request>,
    /// Ids assigned to the duplicates, in requested output order.
    pub new_ids: Vec<String>,
    pub deletes: Vec<Request>,
    pub repositions: Vec<Request>,
}

fn generated_slide_id() -> String {
    format!("gen_slide_{}", Uuid::new_v4().simple())
}

/// One batch of duplicate/delete operations for the legacy counts mode:
/// count > 1 duplicates the slide count−1 times adjacent to the source,
/// count == 0 deletes it. Out-of-range indices are logged and skipped.
pub fn plan_legacy_counts(slides: &[Slide], counts: &BTreeMap<usize, u32>) -> Vec<Request> {
    let max_index = slides.len().saturating_sub(1);
    for index in counts.keys() {
        if *index > max_index || slides.is_empty() {
            log::warn!("slide index {index} out of range (max {max_index}); ignored");
        }
    }

    let mut requests = Vec::new();
    for (index, count) in counts {
        if *count > 1 {
            if let Some(slide) = slides.get(*index) {
                for _ in 1..*count {
                    requests.push(Request::DuplicateObject(DuplicateObject {
                        object_id: slide.object_id.clone(),
                        object_ids: None,
                    }));
                }
            }
        }
    }
    for (index, count) in counts {
        if *count == 0 {
            if let Some(slide) = slides.get(*index) {
                requests.push(Request::DeleteObject(DeleteObject {
                    object_id: slide.object_id.clone(),
                }));
            }
        }
    }
    requests
}

/// Plan a full rebuild: one duplicate per sequence entry (with a fresh
/// generated id), deletion of every original slide, and repositioning of the
/// duplicates to consecutive positions in requested order. Out-of-range
/// entries are logged and skipped.
pub fn plan_sequence(slides: &[Slide], sequence: &[i64]) -> SequencePlan {
    let mut duplicates = Vec::new();
    let mut new_ids = Vec::new();
    for &entry in sequence {
        let Ok(index) = usize::try_from(entry) else {
            log::warn!("slide index {entry} out of range; skipped");
            continue;
        };
        let Some(slide) = slides.get(index) else {
            log::warn!("slide index {entry} out of range; skipped");
            continue;
        };
        let new_id = generated_slide_id();
        duplicates.push(Request::DuplicateObject(DuplicateObject {
            object_id: slide.object_id.clone(),
            object_ids: Some(HashMap::from([(slide.object_id.clone(), new_id.clone())])),
        }));
        new_ids.push(new_id);
    }

    let deletes = slides
        .iter()
        .map(|slide| {
            Request::DeleteObject(DeleteObject { object_id: slide.object_id.clone() })
        })
        .collect();

    let repositions = new_ids
        .iter()
        .enumerate()
        .map(|(position, id)| {
            Request::UpdateSlidesPosition(UpdateSlidesPosition {
                slide_object_ids: vec![id.clone()],
                insertion_index: position as u32,
            })
        })
        .collect();

    SequencePlan { duplicates, new_ids, deletes, repositions }
}

/// Copy a whole presentation file, optionally into a folder. The display
/// name defaults to `Copy of <source name>`. A failed copy with a folder
/// constraint is retried once without it — folder permissions are the usual
/// culprit — before the failure propagates.
pub async fn copy_to_folder(
    ctx: &GoogleContext,
    presentation_url: &str,
    folder_ref: &str,
    new_name: Option<&str>,
) -> Result<String, AppError> {
    let source_id = resolve::presentation_id(presentation_url)?;
    let source = ctx.drive_file(&source_id).await?;
    let base_name = source.name.unwrap_or_else(|| "Presentation".to_string());
    let target_name = match new_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("Copy of {base_name}"),
    };

    let folder = resolve::folder_id(folder_ref);
    let folder = (!folder.is_empty()).then_some(folder);

    match ctx.drive_copy(&source_id, &target_name, folder.as_deref()).await {
        Ok(id) => {
            log::info!("Copied {source_id} to {id} ({target_name})");
            Ok(id)
        }
        Err(e) if folder.is_some() => {
            log::warn!("copy into folder failed ({e}); retrying without folder constraint");
            let id = ctx.drive_copy(&source_id, &target_name, None).await?;
            log::info!("Copied {source_id} to {id} ({target_name}) outside the folder");
            Ok(id)
        }
        Err(e) => Err(e),
    }
}

/// Apply legacy counts to a presentation as a single batch.
pub async fn apply_legacy_counts(
    ctx: &GoogleContext,
    presentation_id: &str,
    counts: &BTreeMap<usize, u32>,
) -> Result<(), AppError> {
    let presentation = ctx.get_presentation(presentation_id).await?;
    let requests = plan_legacy_counts(&presentation.slides, counts);
    ctx.batch_update(presentation_id, requests).await
}

/// Rebuild the slide sequence in three sequential batches. Not atomic: a
/// failure between batches leaves the copy in a partial state for the caller
/// to inspect; nothing is rolled back.
pub async fn apply_sequence(
    ctx: &GoogleContext,
    presentation_id: &str,
    sequence: &[i64],
) -> Result<(), AppError> {
    let presentation = ctx.get_presentation(presentation_id).await?;
    if presentation.slides.is_empty() {
        return Ok(());
    }
    let plan = plan_sequence(&presentation.slides, sequence);
    ctx.batch_update(presentation_id, plan.duplicates).await?;
    ctx.batch_update(presentation_id, plan.deletes).await?;
    ctx.batch_update(presentation_id, plan.repositions).await?;
    log::info!(
        "Rebuilt {presentation_id}: {} slides in requested order",
        plan.new_ids.len()
    );
    Ok(())
}

/// Copy the source presentation, then reshape the copy. A provided
/// `sequence` — even an empty one — takes absolute precedence over counts;
/// with neither, the copy is returned untouched.
pub async fn advanced_copy(
    ctx: &GoogleContext,
    presentation_url: &str,
    counts: &BTreeMap<usize, u32>,
    folder_ref: &str,
    new_name: Option<&str>,
    sequence: Option<&[i64]>,
) -> Result<String, AppError> {
    let new_presentation_id =
        copy_to_folder(ctx, presentation_url, folder_ref, new_name).await?;
    if let Some(sequence) = sequence {
        apply_sequence(ctx, &new_presentation_id, sequence).await?;
    } else if !counts.is_empty() {
        apply_legacy_counts(ctx, &new_presentation_id, counts).await?;
    }
    Ok(new_presentation_id)
}

/// Copy a single slide into its own presentation. `new_name` is required —
/// a one-slide copy with an inherited name is never what the caller wants.
pub async fn copy_single_slide(
    ctx: &GoogleContext,
    presentation_url: &str,
    slide_index: i64,
    folder_ref: &str,
    new_name: &str,
) -> Result<String, AppError> {
    if new_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "new_name is required when copying a single slide".to_string(),
        ));
    }
    advanced_copy(
        ctx,
        presentation_url,
        &BTreeMap::new(),
        folder_ref,
        Some(new_name),
        Some(&[slide_index]),
    )
    .await
}
