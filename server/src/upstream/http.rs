//! `reqwest`-backed implementation of [`ProductApi`].

use std::time::Duration;

use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use super::{ProductApi, UpstreamError};
use crate::config::UpstreamTimeouts;

const PRODUCT_PATH: [&str; 3] = ["web", "v1", "product"];
const PRODUCTS_PATH: [&str; 3] = ["web", "v1", "products"];

/// HTTP client bound to the upstream base URL. Cheap to share behind an `Arc`.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Build a client for `base_url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http(s) base or the
    /// HTTP client fails to build.
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Each segment is percent-encoded,
    /// so an id containing `/` stays a single segment.
    fn endpoint<I, S>(&self, segments: I) -> Result<Url, UpstreamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(request: RequestBuilder) -> Result<Value, UpstreamError> {
        let resp = request
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }
        decode_body(&body)
    }
}

/// Decode a success body. An empty body relays as JSON `null`.
pub(crate) fn decode_body(body: &str) -> Result<Value, UpstreamError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| UpstreamError::Parse(e.to_string()))
}

#[async_trait::async_trait]
impl ProductApi for UpstreamClient {
    async fn get_product(&self, product_id: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(PRODUCT_PATH)?;
        Self::send(self.http.get(url).query(&[("product_id", product_id)])).await
    }

    async fn create_product(&self, body: Value) -> Result<Value, UpstreamError> {
        let url = self.endpoint(PRODUCT_PATH)?;
        Self::send(self.http.post(url).json(&body)).await
    }

    async fn update_product(&self, body: Value) -> Result<Value, UpstreamError> {
        let url = self.endpoint(PRODUCT_PATH)?;
        Self::send(self.http.put(url).json(&body)).await
    }

    async fn delete_product(&self, product_id: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(PRODUCT_PATH.into_iter().chain([product_id]))?;
        Self::send(self.http.delete(url)).await
    }

    async fn list_products(&self, params: Vec<(String, String)>) -> Result<Value, UpstreamError> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        Self::send(self.http.get(url).query(&params)).await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
