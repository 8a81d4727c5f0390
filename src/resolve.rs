//! Resolving user-supplied URLs to stable Drive/Slides identifiers.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::AppError;

static PRESENTATION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("presentation id pattern"));
static FOLDER_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/folders/([a-zA-Z0-9_-]+)").expect("folder segment pattern"));
static QUERY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("query id pattern"));
static BARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("bare id pattern"));

/// Extract the presentation id from a Slides URL — the segment after `/d/`
/// (covers both `.../d/<id>` and `.../presentation/d/<id>` shapes).
pub fn presentation_id(url: &str) -> Result<String, AppError> {
    PRESENTATION_ID_RE
        .captures(url)
        .map(|c| c[1].to_string())
        .ok_or_else(|| AppError::InvalidReference(url.to_string()))
}

/// Resolve a folder reference to a folder id. Accepts a `/folders/<id>` URL,
/// a `?id=<id>` URL, or a bare id, tried in that order. An empty reference —
/// or one matching none of the patterns — resolves to an empty string, which
/// callers treat as "no folder constraint".
pub fn folder_id(reference: &str) -> String {
    if reference.is_empty() {
        return String::new();
    }
    if let Some(c) = FOLDER_SEGMENT_RE.captures(reference) {
        return c[1].to_string();
    }
    if let Some(c) = QUERY_ID_RE.captures(reference) {
        return c[1].to_string();
    }
    if BARE_ID_RE.is_match(reference) {
        return reference.to_string();
    }
    String::new()
}

/// Canonical edit URL for a presentation id.
pub fn presentation_url(id: &str) -> String {
    format!("https://docs.google.com/presentation/d/{id}/edit")
}
