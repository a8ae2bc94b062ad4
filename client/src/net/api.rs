//! REST helpers for this app's own `/api/product(s)` routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns an error since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `String` so pages can log them and raise a toast
//! without a shared error type across the wasm boundary.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{Product, ProductDraft, ProductId, ProductPage};

const PRODUCT_ENDPOINT: &str = "/api/product";
const PRODUCTS_ENDPOINT: &str = "/api/products";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described call against the proxy, built before any I/O happens.
/// Query values are raw; `send_json` hands them to gloo-net for encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

#[must_use]
pub fn list_products_request(page: u32, limit: u32, search: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        path: PRODUCTS_ENDPOINT,
        query: vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("search", search.to_owned()),
        ],
        body: None,
    }
}

#[must_use]
pub fn create_product_request(draft: &ProductDraft) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        path: PRODUCT_ENDPOINT,
        query: Vec::new(),
        body: serde_json::to_value(draft).ok(),
    }
}

#[must_use]
pub fn update_product_request(product: &Product) -> ApiRequest {
    ApiRequest {
        method: Method::Put,
        path: PRODUCT_ENDPOINT,
        query: Vec::new(),
        body: serde_json::to_value(product).ok(),
    }
}

#[must_use]
pub fn delete_product_request(id: &ProductId) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: PRODUCT_ENDPOINT,
        query: vec![("product_id", id.to_string())],
        body: None,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(method: Method, status: u16) -> String {
    format!("{method:?} request failed: {status}")
}

/// Send a request and decode the JSON reply.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or an
/// undecodable body.
pub async fn send_json(request: &ApiRequest) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(request.path),
            Method::Post => Request::post(request.path),
            Method::Put => Request::put(request.path),
            Method::Delete => Request::delete(request.path),
        };
        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(request.query.iter().map(|(key, value)| (*key, value.as_str())))
        };
        let resp = match &request.body {
            Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(request.method, resp.status()));
        }
        resp.json::<Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of products.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply is not a product page.
pub async fn fetch_products(page: u32, limit: u32, search: &str) -> Result<ProductPage, String> {
    let value = send_json(&list_products_request(page, limit, search)).await?;
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Create a product from form values.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_product(draft: &ProductDraft) -> Result<Value, String> {
    send_json(&create_product_request(draft)).await
}

/// Replace a product with the given record.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_product(product: &Product) -> Result<Value, String> {
    send_json(&update_product_request(product)).await
}

/// Delete a product by id.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_product(id: &ProductId) -> Result<Value, String> {
    send_json(&delete_product_request(id)).await
}
