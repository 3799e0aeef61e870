use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::respond::PrettyJson;
use crate::services::album_service;
use crate::state::album::{Album, AlbumStore};

/// Build the album routes.
pub fn routes(store: AlbumStore) -> Router {
    Router::new()
        .route("/albums", get(list_albums))
        .route(
            "/albums/:id",
            get(get_album).patch(update_album).delete(delete_album),
        )
        .route("/album", post(create_album))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// GET /albums
// Full catalog, insertion order
// ─────────────────────────────────────────────────────────────
//
async fn list_albums(State(store): State<AlbumStore>) -> PrettyJson<Vec<Album>> {
    PrettyJson(album_service::list(&store))
}

//
// ─────────────────────────────────────────────────────────────
// GET /albums/{id}
// Single album or 404
// ─────────────────────────────────────────────────────────────
//
async fn get_album(
    Path(id): Path<String>,
    State(store): State<AlbumStore>,
) -> Result<PrettyJson<Album>, ApiError> {
    // Empty id short-circuits before any lookup.
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }

    match album_service::get(&store, &id) {
        Some(album) => Ok(PrettyJson(album)),
        None => Err(ApiError::NotFound),
    }
}

//
// ─────────────────────────────────────────────────────────────
// POST /album
// Append a full album record
// ─────────────────────────────────────────────────────────────
//
async fn create_album(
    State(store): State<AlbumStore>,
    body: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Album>), ApiError> {
    // Bodies that do not deserialize into the full Album shape are
    // rejected with a message body; nothing is appended.
    let Json(album) = body.map_err(|_| ApiError::MalformedBody)?;

    let created = album_service::create(&store, album);
    Ok((StatusCode::CREATED, PrettyJson(created)))
}

//
// ─────────────────────────────────────────────────────────────
// PATCH /albums/{id}
// Partial update from an untyped key/value payload
// ─────────────────────────────────────────────────────────────
//
async fn update_album(
    Path(id): Path<String>,
    State(store): State<AlbumStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<PrettyJson<Album>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }

    let Json(payload) = body.map_err(|_| ApiError::MalformedBody)?;
    let patch = payload.as_object().ok_or(ApiError::MalformedBody)?;

    match album_service::update(&store, &id, patch) {
        Some(album) => Ok(PrettyJson(album)),
        None => Err(ApiError::NotFound),
    }
}

//
// ─────────────────────────────────────────────────────────────
// DELETE /albums/{id}
// Remove the first match, keep the rest in order
// ─────────────────────────────────────────────────────────────
//
async fn delete_album(
    Path(id): Path<String>,
    State(store): State<AlbumStore>,
) -> Result<PrettyJson<Value>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }

    if album_service::delete(&store, &id) {
        Ok(PrettyJson(json!({ "message": "Album deleted successfully" })))
    } else {
        Err(ApiError::NotFound)
    }
}
