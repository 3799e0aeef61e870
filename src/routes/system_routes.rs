use axum::{extract::State, routing::get, Router};
use serde_json::json;

use crate::config::AppConfig;
use crate::respond::PrettyJson;
use crate::services::album_service;
use crate::state::album::AlbumStore;

/// State shared by the /system routes: the catalog for stats, the
/// config for the version string.
#[derive(Clone)]
pub struct SystemState {
    pub store: AlbumStore,
    pub config: AppConfig,
}

pub fn routes(store: AlbumStore, config: AppConfig) -> Router {
    Router::new()
        .route("/alive", get(alive))
        .route("/version", get(version))
        .route("/stats", get(stats))
        .with_state(SystemState { store, config })
}

/// GET /system/alive — liveness probe, plain text.
async fn alive() -> &'static str {
    "OK"
}

/// GET /system/version — version string from config.json.
async fn version(State(state): State<SystemState>) -> PrettyJson<serde_json::Value> {
    PrettyJson(json!({
        "version": state.config.server_version
    }))
}

/// GET /system/stats — how many albums the catalog currently holds.
async fn stats(State(state): State<SystemState>) -> PrettyJson<serde_json::Value> {
    PrettyJson(json!({
        "albums": album_service::count(&state.store)
    }))
}
