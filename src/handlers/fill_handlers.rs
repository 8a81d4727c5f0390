use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::intake;
use crate::payloads::{FillTemplateRequest, FillTemplateResponse, UploadFillResponse};
use crate::resolve;
use crate::sequence;
use crate::state::AppState;
use crate::template;

/// POST /api/fill-template — substitute caller-supplied values into the
/// slide located by its `$`-identifiers.
pub async fn fill_template(
    state: web::Data<AppState>,
    body: web::Json<FillTemplateRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let outcome = template::render(
        &ctx,
        &body.presentation_url,
        &body.slide_identifiers,
        &body.replacements,
        body.require_all_markers,
    )
    .await?;

    let message = format!(
        "Replaced {} markers in slide {}",
        outcome.replaced.len(),
        outcome.slide_index
    );
    Ok(HttpResponse::Ok().json(FillTemplateResponse {
        success: true,
        slide_index: outcome.slide_index,
        replaced: outcome.replaced,
        message,
    }))
}

#[derive(MultipartForm)]
pub struct UploadFillForm {
    pub presentation_url: Text<String>,
    /// Space-separated `$`-identifier tokens locating the target slide.
    pub slide_identifier: Text<String>,
    pub folder_url_or_id: Option<Text<String>>,
    pub new_name: Option<Text<String>>,
    pub file: TempFile,
}

/// POST /api/upload-and-fill — extract a title and description from an
/// uploaded PDF/Word document, copy the template presentation, and fill the
/// target slide of the copy.
pub async fn upload_and_fill(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<UploadFillForm>,
) -> Result<HttpResponse, AppError> {
    let file_name = form
        .file
        .file_name
        .clone()
        .ok_or_else(|| AppError::BadRequest("Uploaded file has no name".to_string()))?;
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| format!(".{ext}"))
        .unwrap_or_default();

    let bytes = std::fs::read(form.file.file.path())?;
    let text = intake::extract_text(&bytes, &extension)?;
    let summary = intake::split_title_description(&text);
    log::info!(
        "Extracted {} chars from {file_name}; title: {:?}",
        text.len(),
        summary.title
    );

    let identifiers: Vec<String> = form
        .slide_identifier
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let ctx = state.google().await?;
    let folder_ref = form.folder_url_or_id.as_ref().map(|t| t.as_str()).unwrap_or("");
    let new_name = form.new_name.as_ref().map(|t| t.as_str());
    let new_id =
        sequence::copy_to_folder(&ctx, &form.presentation_url, folder_ref, new_name).await?;
    let new_url = resolve::presentation_url(&new_id);

    let replacements: BTreeMap<String, Option<String>> = BTreeMap::from([
        ("title".to_string(), Some(summary.title.clone())),
        ("description".to_string(), Some(summary.description.clone())),
    ]);
    let outcome = template::render(&ctx, &new_url, &identifiers, &replacements, false).await?;

    Ok(HttpResponse::Ok().json(UploadFillResponse {
        success: true,
        new_presentation_id: new_id,
        new_presentation_url: new_url,
        slide_index: outcome.slide_index,
        applied_replacements: BTreeMap::from([
            ("title".to_string(), summary.title),
            ("description".to_string(), summary.description),
        ]),
        replaced: outcome.replaced,
    }))
}
