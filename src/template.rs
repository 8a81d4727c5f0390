//! Template engine: locating a slide by its `$`-identifiers and building the
//! batch of text substitutions that populates it.
//!
//! Plan construction is pure — it works on an already-fetched tree and emits
//! the operation list without touching the network. `render` is the driver
//! that fetches, plans, and submits the batch in one call.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::AppError;
use crate::google::client::GoogleContext;
use crate::google::types::{
    Presentation, ReplaceAllText, Request, SubstringMatch,
};
use crate::markers::{find_markers, Sigil};
use crate::resolve;

/// Substring vocabulary classifying replacement keys into semantic buckets.
const TITLE_HINTS: &[&str] = &["title", "titulo", "heading", "main"];
const DESCRIPTION_HINTS: &[&str] = &["description", "descripcion", "body", "texto"];

fn is_title_like(base: &str) -> bool {
    TITLE_HINTS.iter().any(|hint| base.contains(hint))
}

fn is_description_like(base: &str) -> bool {
    DESCRIPTION_HINTS.iter().any(|hint| base.contains(hint))
}

/// The operations to submit for one render, plus what they will touch.
#[derive(Debug)]
pub struct RenderPlan {
    pub slide_index: usize,
    pub slide_object_id: String,
    pub requests: Vec<Request>,
    /// Component markers that resolved to a value, in scan order.
    pub applied: Vec<String>,
}

/// Result of a submitted render.
#[derive(Debug)]
pub struct RenderOutcome {
    pub slide_index: usize,
    pub replaced: Vec<String>,
}

/// First-write-wins semantic values extracted from the replacement map.
#[derive(Debug, Default)]
struct SemanticValues {
    title: Option<String>,
    description: Option<String>,
}

/// Ensure each wanted identifier is `$`-prefixed and lower-cased, dropping
/// blanks. Empty input — before or after cleanup — is an error.
fn normalize_identifiers(wanted: &[String]) -> Result<Vec<String>, AppError> {
    let normalized: Vec<String> = wanted
        .iter()
        .map(|ident| ident.trim())
        .filter(|ident| !ident.is_empty())
        .map(|ident| {
            if ident.starts_with('$') {
                ident.to_lowercase()
            } else {
                format!("${}", ident.to_lowercase())
            }
        })
        .collect();
    if normalized.is_empty() {
        return Err(AppError::EmptyIdentifierSet);
    }
    Ok(normalized)
}

fn locate_normalized(
    presentation: &Presentation,
    normalized: &[String],
) -> Result<usize, AppError> {
    let wanted: BTreeSet<&str> = normalized.iter().map(String::as_str).collect();
    for (index, slide) in presentation.slides.iter().enumerate() {
        let present: BTreeSet<String> = find_markers(slide, Sigil::Identifier)
            .into_iter()
            .map(|m| m.to_lowercase())
            .collect();
        if wanted.iter().all(|id| present.contains(*id)) {
            return Ok(index);
        }
    }
    Err(AppError::SlideNotFound(normalized.join(", ")))
}

/// Index of the first slide whose identifier set contains every wanted id.
/// Multiple qualifying slides are not an error; the first wins.
pub fn locate_slide_by_identifiers(
    presentation: &Presentation,
    wanted: &[String],
) -> Result<usize, AppError> {
    let normalized = normalize_identifiers(wanted)?;
    locate_normalized(presentation, &normalized)
}

/// Strip sigils, lower-case keys, drop null values, and fill the semantic
/// buckets (first non-null value per bucket wins).
fn normalize_replacements(
    replacements: &BTreeMap<String, Option<String>>,
) -> (BTreeMap<String, String>, SemanticValues) {
    let mut normalized = BTreeMap::new();
    let mut semantic = SemanticValues::default();
    for (key, value) in replacements {
        let Some(value) = value else { continue };
        let base = key.strip_prefix('#').unwrap_or(key).to_lowercase();
        // Buckets never hold empty strings, so the priority chain can treat
        // an unset bucket and an empty value the same way.
        if !value.is_empty() {
            if is_title_like(&base) && semantic.title.is_none() {
                semantic.title = Some(value.clone());
            }
            if is_description_like(&base) && semantic.description.is_none() {
                semantic.description = Some(value.clone());
            }
        }
        normalized.insert(base, value.clone());
    }
    (normalized, semantic)
}

fn scoped_replacement(slide_object_id: &str, marker: &str, value: String) -> Request {
    Request::ReplaceAllText(ReplaceAllText {
        contains_text: SubstringMatch { text: marker.to_string(), match_case: false },
        replace_text: value,
        page_object_ids: vec![slide_object_id.to_string()],
    })
}

/// Build the full operation list for populating the slide located by
/// `wanted`: one case-insensitive, slide-scoped substitution per component
/// marker that resolves to a value, followed by one empty-string substitution
/// per `$`-identifier on the slide (identifiers are single-use labels and
/// never survive a render).
pub fn build_render_plan(
    presentation: &Presentation,
    wanted: &[String],
    replacements: &BTreeMap<String, Option<String>>,
    require_all_markers: bool,
) -> Result<RenderPlan, AppError> {
    let normalized_ids = normalize_identifiers(wanted)?;
    if replacements.is_empty() {
        return Err(AppError::EmptyReplacementSet);
    }

    let slide_index = locate_normalized(presentation, &normalized_ids)?;
    let slide = &presentation.slides[slide_index];
    let slide_object_id = slide.object_id.clone();

    let identifiers: BTreeSet<String> = find_markers(slide, Sigil::Identifier)
        .into_iter()
        .map(|m| m.to_lowercase())
        .collect();
    let components: BTreeSet<String> = find_markers(slide, Sigil::Component)
        .into_iter()
        .map(|m| m.to_lowercase())
        .collect();

    let (normalized, semantic) = normalize_replacements(replacements);

    if require_all_markers {
        let missing: Vec<String> = normalized
            .keys()
            .map(|base| format!("#{base}"))
            .filter(|marker| !components.contains(marker))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingMarkers(missing));
        }
    }

    // Iteration is driven by what exists on the slide, not by the caller's
    // keys: a replacement without a matching marker is simply unused.
    let mut requests = Vec::new();
    let mut applied = Vec::new();
    for marker in &components {
        let base = marker.trim_start_matches('#');
        let value = if is_title_like(base) {
            semantic.title.clone().or_else(|| normalized.get(base).cloned())
        } else if is_description_like(base) {
            semantic.description.clone().or_else(|| normalized.get(base).cloned())
        } else if let Some(value) = normalized.get(base) {
            Some(value.clone())
        } else {
            semantic.description.clone().or_else(|| semantic.title.clone())
        };
        match value {
            Some(value) if !value.is_empty() => {
                requests.push(scoped_replacement(&slide_object_id, marker, value));
                applied.push(marker.clone());
            }
            _ => log::debug!("marker {marker} has no value; skipped"),
        }
    }

    for identifier in &identifiers {
        requests.push(scoped_replacement(&slide_object_id, identifier, String::new()));
    }

    if requests.is_empty() {
        return Err(AppError::NothingToReplace);
    }

    Ok(RenderPlan { slide_index, slide_object_id, requests, applied })
}

/// Fetch the presentation, build the plan, and submit it as one batch.
pub async fn render(
    ctx: &GoogleContext,
    presentation_url: &str,
    wanted: &[String],
    replacements: &BTreeMap<String, Option<String>>,
    require_all_markers: bool,
) -> Result<RenderOutcome, AppError> {
    let presentation_id = resolve::presentation_id(presentation_url)?;
    let presentation = ctx.get_presentation(&presentation_id).await?;
    let plan = build_render_plan(&presentation, wanted, replacements, require_all_markers)?;
    let replaced = plan.applied.clone();
    let slide_index = plan.slide_index;
    ctx.batch_update(&presentation_id, plan.requests).await?;
    log::info!(
        "Rendered slide {slide_index} of {presentation_id}: {} markers replaced",
        replaced.len()
    );
    Ok(RenderOutcome { slide_index, replaced })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: &[(&str, Option<&str>)]) -> BTreeMap<String, Option<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn identifier_normalization_prefixes_and_lowercases() {
        let normalized =
            normalize_identifiers(&["Intro".to_string(), "$CLOSING".to_string()]).unwrap();
        assert_eq!(normalized, vec!["$intro", "$closing"]);
    }

    #[test]
    fn identifier_normalization_rejects_blank_input() {
        assert!(matches!(
            normalize_identifiers(&[]),
            Err(AppError::EmptyIdentifierSet)
        ));
        assert!(matches!(
            normalize_identifiers(&["  ".to_string()]),
            Err(AppError::EmptyIdentifierSet)
        ));
    }

    #[test]
    fn semantic_buckets_first_write_wins_and_nulls_drop() {
        let (normalized, semantic) = normalize_replacements(&replacements(&[
            ("#main_title", Some("First title")),
            ("subtitle_main", Some("Second title-like")),
            ("body", Some("The body")),
            ("ignored", None),
        ]));
        // Raw keys iterate sorted, so "#main_title" seeds the title bucket
        // before "subtitle_main" is seen.
        assert_eq!(semantic.title.as_deref(), Some("First title"));
        assert_eq!(semantic.description.as_deref(), Some("The body"));
        assert!(normalized.contains_key("main_title"));
        assert!(!normalized.contains_key("ignored"));
    }
}
