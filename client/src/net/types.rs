//! Shared wire DTOs for the browser/server boundary.
//!
//! DESIGN
//! ======
//! The server relays upstream JSON untouched, so these types are the only
//! place the product shape is assumed. Unknown upstream fields are kept in
//! `extra` so an edit round-trip sends them back unchanged.
//!
//! A list page is decoded row by row: a row that is not a product (no usable
//! `product_id`, unreadable price) is dropped instead of failing the page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upstream-assigned product identifier. Upstream may send either a string
/// or an integer; the original representation is preserved on the way back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A product as returned by the upstream product API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_title: String,
    #[serde(default, deserialize_with = "deserialize_price", serialize_with = "serialize_price")]
    pub product_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    /// Upstream fields this UI does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Create/edit form values as sent to `/api/product`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDraft {
    pub product_title: String,
    #[serde(serialize_with = "serialize_price")]
    pub product_price: f64,
    pub product_description: String,
    pub product_category: String,
    pub product_image: String,
}

impl ProductDraft {
    /// Overlay the draft on an existing record, keeping its id and unknown fields.
    #[must_use]
    pub fn merge_into(&self, original: &Product) -> Product {
        Product {
            product_title: self.product_title.clone(),
            product_price: self.product_price,
            product_description: Some(self.product_description.clone()),
            product_category: Some(self.product_category.clone()),
            product_image: Some(self.product_image.clone()),
            ..original.clone()
        }
    }
}

/// Pagination metadata of a product list response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// One page of products: `{ data: [...], pagination: { total } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Signed-in identity as reported by the identity provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Short-lived ID token issued at sign-in.
    pub id_token: String,
    pub refresh_token: String,
}

impl User {
    /// Name to show in the header: display name, else email, else uid.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("id_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

/// `null` reads as an empty string.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode each row on its own, skipping rows that are not products.
fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<Product>(row) {
            Ok(product) => Some(product),
            Err(_e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("skipping product row: {_e}");
                None
            }
        })
        .collect())
}

/// Accept a JSON number, a numeric string, or `null` (as 0).
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom("expected numeric string")),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Integral prices go out as JSON integers (`100000`, not `100000.0`).
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    #[allow(clippy::cast_possible_truncation)]
    if price.is_finite() && price.fract() == 0.0 && price.abs() <= MAX_SAFE_INTEGER {
        return serializer.serialize_i64(*price as i64);
    }
    serializer.serialize_f64(*price)
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return Ok(count);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom("expected integer string")),
        _ => Err(D::Error::custom("expected number")),
    }
}
