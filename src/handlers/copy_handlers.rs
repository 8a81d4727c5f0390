use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::payloads::{CopyCustomRequest, CopyRequest, CopyResponse, CopySlideRequest};
use crate::resolve;
use crate::sequence;
use crate::state::AppState;

fn copy_response(new_presentation_id: String) -> HttpResponse {
    let new_presentation_url = resolve::presentation_url(&new_presentation_id);
    HttpResponse::Ok().json(CopyResponse {
        success: true,
        new_presentation_id,
        new_presentation_url,
    })
}

/// POST /api/copy-presentation — faithful whole-file copy.
pub async fn copy_presentation(
    state: web::Data<AppState>,
    body: web::Json<CopyRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let new_id = sequence::copy_to_folder(
        &ctx,
        &body.presentation_url,
        &body.folder_url_or_id,
        body.new_name.as_deref(),
    )
    .await?;
    Ok(copy_response(new_id))
}

/// POST /api/copy-custom — copy, then reshape by sequence or legacy counts.
pub async fn copy_custom(
    state: web::Data<AppState>,
    body: web::Json<CopyCustomRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let new_id = sequence::advanced_copy(
        &ctx,
        &body.presentation_url,
        &body.slide_counts,
        &body.folder_url_or_id,
        body.new_name.as_deref(),
        body.slide_sequence.as_deref(),
    )
    .await?;
    Ok(copy_response(new_id))
}

/// POST /api/copy-slide — one slide into its own presentation.
pub async fn copy_slide(
    state: web::Data<AppState>,
    body: web::Json<CopySlideRequest>,
) -> Result<HttpResponse, AppError> {
    if body.slide_index < 0 {
        return Err(AppError::BadRequest("slide_index must be >= 0".to_string()));
    }
    let ctx = state.google().await?;
    let new_id = sequence::copy_single_slide(
        &ctx,
        &body.presentation_url,
        body.slide_index,
        &body.folder_url_or_id,
        &body.new_name,
    )
    .await?;
    Ok(copy_response(new_id))
}
