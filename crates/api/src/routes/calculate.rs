//! Allocation calculation route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::routes::{error_response, pack_size_error_response};
use crate::AppState;
use packwise_core::allocation::MAX_QUANTITY;
use packwise_core::AllocationError;
use packwise_db::PackSizeRepository;
use packwise_shared::AppError;

/// Creates the calculation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Request body for a calculation.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Number of items ordered.
    pub quantity: i64,
}

/// A single pack-size/count pair in the response.
#[derive(Debug, Serialize)]
pub struct PackAllocationResponse {
    /// Number of items in this pack.
    pub size: i64,
    /// Number of packs of this size.
    pub count: i64,
}

/// Response for a calculation.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Chosen packs, size-descending.
    pub packs: Vec<PackAllocationResponse>,
}

/// POST `/calculate` - Compute the optimal pack allocation for a quantity.
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> impl IntoResponse {
    // Bounds are re-checked by the calculator; rejecting here keeps garbage
    // requests from costing a repository query.
    if request.quantity <= 0 {
        return error_response(&AppError::Validation("quantity must be > 0".to_string()));
    }
    if request.quantity > MAX_QUANTITY {
        return error_response(&AppError::Validation("quantity too large".to_string()));
    }

    let repo = PackSizeRepository::new((*state.db).clone());
    let sizes: Vec<i64> = match repo.list().await {
        Ok(rows) => rows.into_iter().map(|r| r.size).collect(),
        Err(e) => return pack_size_error_response("Failed to list pack sizes for calculate", &e),
    };

    match state.calculator.calculate(request.quantity, &sizes) {
        Ok(allocations) => {
            let packs = allocations
                .into_iter()
                .map(|a| PackAllocationResponse {
                    size: a.size,
                    count: a.count,
                })
                .collect();
            (StatusCode::OK, Json(CalculateResponse { packs })).into_response()
        }
        Err(e) => allocation_error_response(&e),
    }
}

/// Maps a calculator error to an HTTP response.
fn allocation_error_response(err: &AllocationError) -> Response {
    match err {
        AllocationError::InvalidQuantity => {
            error_response(&AppError::Validation("quantity must be > 0".to_string()))
        }
        AllocationError::QuantityTooLarge => {
            error_response(&AppError::Validation("quantity too large".to_string()))
        }
        AllocationError::NoPackSizes => {
            error_response(&AppError::Validation("no pack sizes configured".to_string()))
        }
        AllocationError::InvalidPackSizes => error_response(&AppError::Validation(
            "invalid pack sizes configured".to_string(),
        )),
        AllocationError::Internal(e) => {
            error!(error = %e, "Calculator failed after validation");
            error_response(&AppError::Internal("An error occurred".to_string()))
        }
    }
}
