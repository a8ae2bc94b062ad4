//! API error type shared by the product route handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaves the server as `{ "error": <string> }`. Upstream
//! failures are logged with a per-handler tag and collapsed to a fixed
//! message so no upstream detail reaches the caller.

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// The proxied operation a handler performs; selects log tag and failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    ListProducts,
}

impl Operation {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::GetProduct => "API_PRODUCT_GET",
            Self::CreateProduct => "API_PRODUCT_POST",
            Self::UpdateProduct => "API_PRODUCT_PUT",
            Self::DeleteProduct => "API_PRODUCT_DELETE",
            Self::ListProducts => "API_PRODUCTS_GET",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::GetProduct => "Failed to fetch product",
            Self::CreateProduct => "Failed to create product",
            Self::UpdateProduct => "Failed to update product",
            Self::DeleteProduct => "Failed to delete product",
            Self::ListProducts => "Failed to fetch",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required query parameter was absent or empty.
    #[error("{0}")]
    MissingParam(&'static str),

    /// The upstream call (or reading the request body) failed.
    #[error("{} failed: {cause}", .op.tag())]
    Failed { op: Operation, cause: String },
}

impl ApiError {
    /// Log `cause` under the operation's tag and build the generic failure.
    pub fn failed(op: Operation, cause: impl Display) -> Self {
        let cause = cause.to_string();
        tracing::error!(tag = op.tag(), error = %cause, "product api request failed");
        Self::Failed { op, cause }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) => StatusCode::BAD_REQUEST,
            Self::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message the caller sees.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingParam(message) => message,
            Self::Failed { op, .. } => op.failure_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
