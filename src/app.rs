use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::respond::PrettyJson;
use crate::routes::{album_routes, system_routes};
use crate::state::album::AlbumStore;

/// Build the complete Axum application:
/// - /            (welcome message)
/// - /albums, /album   (catalog CRUD)
/// - /system      (alive + version + stats)
///
/// `store` is cloned as needed; /system gets its own handle so it can
/// report catalog stats.
pub fn build_app(store: AlbumStore, cfg: AppConfig) -> Router {
    Router::new()
        .route("/", get(welcome))

        // /albums, /albums/:id, /album
        .merge(album_routes::routes(store.clone()))

        // /system/*
        .nest("/system", system_routes::routes(store, cfg))

        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// GET /
async fn welcome() -> PrettyJson<&'static str> {
    PrettyJson("Welcome to my API")
}
