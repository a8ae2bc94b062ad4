//! Single-product routes — `GET/POST/PUT/DELETE /api/product`.
//!
//! Each handler issues exactly one upstream call and relays the upstream JSON
//! unchanged. Missing ids are rejected before any upstream traffic.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::Value;

use super::error::{ApiError, Operation};
use crate::state::AppState;

const PRODUCT_ID_PARAM: &str = "product_id";

/// The first `product_id` in the query string, or `None` if it is absent or
/// empty. A later non-empty duplicate is not consulted.
pub(crate) fn find_product_id(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == PRODUCT_ID_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// `GET /api/product?product_id=` — fetch one product.
pub async fn get_product(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let product_id = find_product_id(&params).ok_or(ApiError::MissingParam("product_id is required"))?;

    let body = state
        .upstream
        .get_product(product_id)
        .await
        .map_err(|e| ApiError::failed(Operation::GetProduct, e))?;
    Ok(Json(body))
}

/// `POST /api/product` — create a product from the request body; 201 on success.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::failed(Operation::CreateProduct, e.body_text()))?;

    let created = state
        .upstream
        .create_product(body)
        .await
        .map_err(|e| ApiError::failed(Operation::CreateProduct, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/product` — update a product; the body carries its id.
pub async fn update_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::failed(Operation::UpdateProduct, e.body_text()))?;

    let updated = state
        .upstream
        .update_product(body)
        .await
        .map_err(|e| ApiError::failed(Operation::UpdateProduct, e))?;
    Ok(Json(updated))
}

/// `DELETE /api/product?product_id=` — delete one product.
pub async fn delete_product(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let product_id = find_product_id(&params).ok_or(ApiError::MissingParam("Product ID is required"))?;

    let body = state
        .upstream
        .delete_product(product_id)
        .await
        .map_err(|e| ApiError::failed(Operation::DeleteProduct, e))?;
    Ok(Json(body))
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
