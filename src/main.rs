use actix_web::{middleware, web, App, HttpServer};

use deckhand::config::AppConfig;
use deckhand::handlers;
use deckhand::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    if !config.credentials_path.exists() {
        log::warn!(
            "credentials file not found at {} — data endpoints will fail until it appears",
            config.credentials_path.display()
        );
    }

    let bind = (config.bind_addr.clone(), config.port);
    let state = web::Data::new(AppState::new(config));
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let serve_static = std::path::Path::new("./static").exists();
    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::routes);
        if serve_static {
            app = app.service(actix_files::Files::new("/static", "./static"));
        }
        app
    })
    .bind(bind)?
    .run()
    .await
}
