use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::respond::PrettyJson;

/// Every failure a handler can report. All of them are recovered at the
/// handler boundary and turned into a status + JSON `message` body;
/// none are fatal to the process.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Album ID is required")]
    MissingId,

    #[error("Invalid request payload")]
    MalformedBody,

    #[error("Album not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingId | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, PrettyJson(json!({ "message": self.to_string() }))).into_response()
    }
}
