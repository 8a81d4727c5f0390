use actix_web::{web, HttpResponse};
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::markers::{find_markers, Sigil};
use crate::payloads::{
    ExtractSlideIdsResponse, ListSlidesResponse, PresentationRef,
    SlideComponentsRequest, SlideComponentsResponse, SlideSummary,
};
use crate::resolve;
use crate::state::AppState;

/// POST /api/extract-slide-ids — map of slide index to the `$`-identifiers
/// found on it; slides without identifiers are omitted.
pub async fn extract_slide_ids(
    state: web::Data<AppState>,
    body: web::Json<PresentationRef>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let presentation_id = resolve::presentation_id(&body.presentation_url)?;
    let presentation = ctx.get_presentation(&presentation_id).await?;

    let mut slide_identifiers = BTreeMap::new();
    for (index, slide) in presentation.slides.iter().enumerate() {
        let ids = find_markers(slide, Sigil::Identifier);
        if !ids.is_empty() {
            slide_identifiers.insert(index, ids.into_iter().collect::<Vec<_>>());
        }
    }
    log::info!(
        "{presentation_id}: {} slides carry identifiers",
        slide_identifiers.len()
    );

    let message = format!("Found {} slides with identifiers", slide_identifiers.len());
    Ok(HttpResponse::Ok().json(ExtractSlideIdsResponse {
        success: true,
        slide_identifiers,
        message,
    }))
}

/// POST /api/get-slide-components — `#`-components of one slide.
pub async fn get_slide_components(
    state: web::Data<AppState>,
    body: web::Json<SlideComponentsRequest>,
) -> Result<HttpResponse, AppError> {
    if body.slide_index < 0 {
        return Err(AppError::BadRequest("slide_index must be >= 0".to_string()));
    }
    let slide_index = body.slide_index as usize;

    let ctx = state.google().await?;
    let presentation_id = resolve::presentation_id(&body.presentation_url)?;
    let presentation = ctx.get_presentation(&presentation_id).await?;

    let slide = presentation.slides.get(slide_index).ok_or_else(|| {
        AppError::BadRequest(format!(
            "slide_index {slide_index} does not exist; the presentation has {} slides",
            presentation.slides.len()
        ))
    })?;

    let components: Vec<String> =
        find_markers(slide, Sigil::Component).into_iter().collect();
    let message = format!(
        "Found {} components in slide {slide_index}",
        components.len()
    );
    Ok(HttpResponse::Ok().json(SlideComponentsResponse {
        success: true,
        slide_index,
        components,
        message,
    }))
}

/// POST /api/list-slides — every slide with its stable id, identifiers, and
/// element count.
pub async fn list_slides(
    state: web::Data<AppState>,
    body: web::Json<PresentationRef>,
) -> Result<HttpResponse, AppError> {
    let ctx = state.google().await?;
    let presentation_id = resolve::presentation_id(&body.presentation_url)?;
    let presentation = ctx.get_presentation(&presentation_id).await?;

    let slides = presentation
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideSummary {
            index,
            object_id: slide.object_id.clone(),
            identifiers: find_markers(slide, Sigil::Identifier).into_iter().collect(),
            page_elements: slide.page_elements.len(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ListSlidesResponse { success: true, slides }))
}
