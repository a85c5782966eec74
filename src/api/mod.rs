mod assets;
mod handlers;

pub use handlers::OUTCOME_HEADER;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::lookup::DictionaryClient;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: DictionaryClient,
}

/// Page shell at `/`, static assets for every other path, and the lookup
/// API under `/api/v1`.
///
/// Assets come from `config.static_dir` when set, otherwise from the copies
/// built into the binary.
pub fn create_router(config: &Config) -> Router {
    let state = AppState {
        dictionary: DictionaryClient::new(config.dictionary_url.clone()),
    };

    let api = Router::new()
        .route("/lookup/{word}", get(handlers::lookup))
        .route("/health", get(handlers::health));

    let router = Router::new().nest("/api/v1", api);
    let router = match &config.static_dir {
        Some(dir) => router
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .fallback_service(ServeDir::new(dir)),
        None => router
            .route("/", get(assets::index))
            .route("/index.html", get(assets::index))
            .route("/app.js", get(assets::app_js))
            .route("/style.css", get(assets::style_css)),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
