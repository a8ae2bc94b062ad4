//! Upstream product API — the external service of record for products.
//!
//! DESIGN
//! ======
//! Route handlers depend on the `ProductApi` trait rather than on `reqwest`
//! directly so tests can substitute a recording mock. Payloads are opaque
//! `serde_json::Value`s: this layer relays whatever upstream returns and
//! enforces no schema of its own.

pub mod http;

pub use http::UpstreamClient;

use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream product API calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The configured base URL cannot carry request paths.
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    /// Transport failure: connect, timeout, or body read.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("upstream response error: status {status}")]
    Status { status: u16, body: String },

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("upstream response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// One method per upstream endpoint. Each call is a single best-effort round
/// trip with no retries.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /web/v1/product?product_id=<id>`
    async fn get_product(&self, product_id: &str) -> Result<Value, UpstreamError>;

    /// `POST /web/v1/product`
    async fn create_product(&self, body: Value) -> Result<Value, UpstreamError>;

    /// `PUT /web/v1/product`
    async fn update_product(&self, body: Value) -> Result<Value, UpstreamError>;

    /// `DELETE /web/v1/product/<id>`
    async fn delete_product(&self, product_id: &str) -> Result<Value, UpstreamError>;

    /// `GET /web/v1/products?<params>` with the params forwarded as given.
    async fn list_products(&self, params: Vec<(String, String)>) -> Result<Value, UpstreamError>;
}
