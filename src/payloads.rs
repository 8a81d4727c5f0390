//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PresentationRef {
    pub presentation_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SlideComponentsRequest {
    pub presentation_url: String,
    pub slide_index: i64,
}

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub presentation_url: String,
    #[serde(default)]
    pub folder_url_or_id: String,
    pub new_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CopyCustomRequest {
    pub presentation_url: String,
    #[serde(default)]
    pub folder_url_or_id: String,
    pub new_name: Option<String>,
    /// Legacy mode: source slide index → desired output count.
    #[serde(default)]
    pub slide_counts: BTreeMap<usize, u32>,
    /// Exact desired output order of source indices. Presence — even of an
    /// empty list — takes precedence over `slide_counts`.
    pub slide_sequence: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct CopySlideRequest {
    pub presentation_url: String,
    pub slide_index: i64,
    #[serde(default)]
    pub folder_url_or_id: String,
    #[serde(default)]
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct FillTemplateRequest {
    pub presentation_url: String,
    pub slide_identifiers: Vec<String>,
    /// Null values are dropped before use.
    pub replacements: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub require_all_markers: bool,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSlideIdsResponse {
    pub success: bool,
    pub slide_identifiers: BTreeMap<usize, Vec<String>>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SlideComponentsResponse {
    pub success: bool,
    pub slide_index: usize,
    pub components: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SlideSummary {
    pub index: usize,
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub identifiers: Vec<String>,
    #[serde(rename = "pageElements")]
    pub page_elements: usize,
}

#[derive(Debug, Serialize)]
pub struct ListSlidesResponse {
    pub success: bool,
    pub slides: Vec<SlideSummary>,
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub success: bool,
    pub new_presentation_id: String,
    pub new_presentation_url: String,
}

#[derive(Debug, Serialize)]
pub struct FillTemplateResponse {
    pub success: bool,
    pub slide_index: usize,
    pub replaced: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UploadFillResponse {
    pub success: bool,
    pub new_presentation_id: String,
    pub new_presentation_url: String,
    pub slide_index: usize,
    /// The values extracted from the document and offered to the template.
    pub applied_replacements: BTreeMap<String, String>,
    /// The component markers actually replaced on the slide.
    pub replaced: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyAccessResponse {
    pub success: bool,
    pub presentation_id: String,
    pub file_name: String,
    pub slide_count: usize,
    pub slides_api_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_api_error: Option<String>,
    pub drive_api_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_api_error: Option<String>,
    pub overall_access: bool,
}
