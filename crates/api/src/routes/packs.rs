//! Pack-size management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::routes::{error_response, pack_size_error_response};
use crate::AppState;
use packwise_db::PackSizeRepository;
use packwise_shared::AppError;

/// Creates the pack-size routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packs", get(list_pack_sizes).post(create_pack_size))
        .route("/packs/{id}", put(update_pack_size).delete(delete_pack_size))
        .route("/packs/reset", post(reset_pack_sizes))
}

/// Response for a single configured pack size.
#[derive(Debug, Serialize)]
pub struct PackSizeResponse {
    /// Row id.
    pub id: i64,
    /// Number of items in the pack.
    pub size: i64,
}

/// Response for listing pack sizes.
#[derive(Debug, Serialize)]
pub struct ListPackSizesResponse {
    /// Configured pack sizes, size-ascending.
    pub packs: Vec<PackSizeResponse>,
}

/// Request body for creating a pack size.
#[derive(Debug, Deserialize)]
pub struct CreatePackSizeRequest {
    /// Number of items in the pack.
    pub size: i64,
}

/// Request body for updating a pack size.
#[derive(Debug, Deserialize)]
pub struct UpdatePackSizeRequest {
    /// New number of items in the pack.
    pub size: i64,
}

/// Response for resetting pack sizes to the defaults.
#[derive(Debug, Serialize)]
pub struct ResetPackSizesResponse {
    /// The installed default sizes.
    pub sizes: Vec<i64>,
}

/// GET `/packs` - List configured pack sizes.
async fn list_pack_sizes(State(state): State<AppState>) -> impl IntoResponse {
    let repo = PackSizeRepository::new((*state.db).clone());
    match repo.list().await {
        Ok(rows) => {
            let packs = rows
                .into_iter()
                .map(|r| PackSizeResponse {
                    id: r.id,
                    size: r.size,
                })
                .collect();
            (StatusCode::OK, Json(ListPackSizesResponse { packs })).into_response()
        }
        Err(e) => pack_size_error_response("Failed to list pack sizes", &e),
    }
}

/// POST `/packs` - Create a pack size.
async fn create_pack_size(
    State(state): State<AppState>,
    Json(request): Json<CreatePackSizeRequest>,
) -> impl IntoResponse {
    if request.size <= 0 {
        return error_response(&AppError::Validation("size must be > 0".to_string()));
    }

    let repo = PackSizeRepository::new((*state.db).clone());
    match repo.create(request.size).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(PackSizeResponse {
                id: row.id,
                size: row.size,
            }),
        )
            .into_response(),
        Err(e) => pack_size_error_response("Failed to create pack size", &e),
    }
}

/// PUT `/packs/{id}` - Update a pack size.
async fn update_pack_size(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePackSizeRequest>,
) -> impl IntoResponse {
    if id <= 0 {
        return error_response(&AppError::Validation("invalid pack size id".to_string()));
    }
    if request.size <= 0 {
        return error_response(&AppError::Validation("size must be > 0".to_string()));
    }

    let repo = PackSizeRepository::new((*state.db).clone());
    match repo.update(id, request.size).await {
        Ok(row) => (
            StatusCode::OK,
            Json(PackSizeResponse {
                id: row.id,
                size: row.size,
            }),
        )
            .into_response(),
        Err(e) => pack_size_error_response("Failed to update pack size", &e),
    }
}

/// DELETE `/packs/{id}` - Delete a pack size.
async fn delete_pack_size(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if id <= 0 {
        return error_response(&AppError::Validation("invalid pack size id".to_string()));
    }

    let repo = PackSizeRepository::new((*state.db).clone());
    match repo.delete(id).await {
        // 204 must not carry a body; keep 200 with an empty object for
        // envelope consistency.
        Ok(()) => (StatusCode::OK, Json(json!({}))).into_response(),
        Err(e) => pack_size_error_response("Failed to delete pack size", &e),
    }
}

/// POST `/packs/reset` - Reset pack sizes to the default set.
async fn reset_pack_sizes(State(state): State<AppState>) -> impl IntoResponse {
    let repo = PackSizeRepository::new((*state.db).clone());
    match repo.reset_to_default().await {
        Ok(sizes) => (StatusCode::OK, Json(ResetPackSizesResponse { sizes })).into_response(),
        Err(e) => pack_size_error_response("Failed to reset pack sizes", &e),
    }
}
