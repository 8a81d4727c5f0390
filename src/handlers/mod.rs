use actix_web::web;

pub mod access_handlers;
pub mod copy_handlers;
pub mod fill_handlers;
pub mod slide_handlers;

/// Route table, shared between the binary and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(access_handlers::index))
        .route("/api/health", web::get().to(access_handlers::health))
        .route(
            "/api/extract-slide-ids",
            web::post().to(slide_handlers::extract_slide_ids),
        )
        .route(
            "/api/get-slide-components",
            web::post().to(slide_handlers::get_slide_components),
        )
        .route("/api/list-slides", web::post().to(slide_handlers::list_slides))
        .route(
            "/api/copy-presentation",
            web::post().to(copy_handlers::copy_presentation),
        )
        .route("/api/copy-custom", web::post().to(copy_handlers::copy_custom))
        .route("/api/copy-slide", web::post().to(copy_handlers::copy_slide))
        .route("/api/fill-template", web::post().to(fill_handlers::fill_template))
        .route(
            "/api/upload-and-fill",
            web::post().to(fill_handlers::upload_and_fill),
        )
        .route("/api/verify-access", web::post().to(access_handlers::verify_access));
}
