//! API route definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use crate::AppState;
use packwise_db::PackSizeError;
use packwise_shared::AppError;

pub mod calculate;
pub mod health;
pub mod packs;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(packs::routes())
        .merge(calculate::routes())
}

/// Renders an [`AppError`] as the JSON error envelope.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.detail(),
        })),
    )
        .into_response()
}

/// Maps a repository error to an HTTP response, logging database failures.
pub(crate) fn pack_size_error_response(context: &str, err: &PackSizeError) -> Response {
    match err {
        PackSizeError::NotFound => {
            error_response(&AppError::NotFound("pack size not found".to_string()))
        }
        PackSizeError::Conflict => {
            error_response(&AppError::Conflict("pack size already exists".to_string()))
        }
        PackSizeError::Database(e) => {
            error!(error = %e, "{context}");
            error_response(&AppError::Database("An error occurred".to_string()))
        }
    }
}
