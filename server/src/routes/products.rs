//! Product collection route — `GET /api/products`.
//!
//! Pure pass-through: every incoming query pair goes upstream unchanged.
//! Search and pagination semantics belong to the upstream service.

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::Value;

use super::error::{ApiError, Operation};
use crate::state::AppState;

/// `GET /api/products?<params>` — list products.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let body = state
        .upstream
        .list_products(params)
        .await
        .map_err(|e| ApiError::failed(Operation::ListProducts, e))?;
    Ok(Json(body))
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
