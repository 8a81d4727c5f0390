use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::payloads::{HealthResponse, PresentationRef, VerifyAccessResponse};
use crate::resolve;
use crate::state::AppState;

/// GET / — service info. A static frontend, when deployed, is mounted under
/// /static by the binary.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "deckhand",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "extract_ids": "POST /api/extract-slide-ids",
            "get_components": "POST /api/get-slide-components",
            "list_slides": "POST /api/list-slides",
            "copy_presentation": "POST /api/copy-presentation",
            "copy_custom": "POST /api/copy-custom",
            "copy_slide": "POST /api/copy-slide",
            "fill_template": "POST /api/fill-template",
            "upload_and_fill": "POST /api/upload-and-fill",
            "verify_access": "POST /api/verify-access",
        }
    }))
}

/// GET /api/health — never errors; a missing credentials file downgrades the
/// status to a warning.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let path = &state.config.credentials_path;
    let response = if path.exists() {
        HealthResponse {
            status: "healthy",
            message: "Service is up and credentials are present".to_string(),
        }
    } else {
        log::warn!("credentials file not found: {}", path.display());
        HealthResponse {
            status: "warning",
            message: format!("Credentials file not found at {}", path.display()),
        }
    };
    HttpResponse::Ok().json(response)
}

/// POST /api/verify-access — probe both API paths; partial access reports
/// rather than fails.
pub async fn verify_access(
    state: web::Data<AppState>,
    body: web::Json<PresentationRef>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let presentation_id = resolve::presentation_id(&body.presentation_url)?;
    let report = ctx.verify_access(&presentation_id).await;

    Ok(HttpResponse::Ok().json(VerifyAccessResponse {
        success: true,
        presentation_id: report.presentation_id,
        file_name: report.file_name,
        slide_count: report.slide_count,
        slides_api_access: report.slides_api_access,
        slides_api_error: report.slides_api_error,
        drive_api_access: report.drive_api_access,
        drive_api_error: report.drive_api_error,
        overall_access: report.overall_access,
    }))
}
