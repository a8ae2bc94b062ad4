use super::*;
use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get};
use serde_json::json;

// =============================================================================
// FAKE UPSTREAM
// =============================================================================

fn timeouts() -> UpstreamTimeouts {
    UpstreamTimeouts { request_secs: 5, connect_secs: 2 }
}

/// Bind a router on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn echo_router() -> Router {
    Router::new()
        .route(
            "/web/v1/product",
            get(|RawQuery(query): RawQuery| async move { Json(json!({ "query": query })) })
                .post(|Json(body): Json<Value>| async move { (StatusCode::CREATED, Json(json!({ "created": body }))) })
                .put(|Json(body): Json<Value>| async move { Json(json!({ "updated": body })) }),
        )
        .route(
            "/web/v1/product/{id}",
            delete(|Path(id): Path<String>| async move { Json(json!({ "deleted": id })) }),
        )
        .route(
            "/web/v1/products",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!({ "data": [], "pagination": { "total": 0 }, "query": query }))
            }),
        )
}

fn failing_router() -> Router {
    Router::new().route(
        "/web/v1/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database exploded").into_response() }),
    )
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn new_rejects_unparseable_url() {
    let err = UpstreamClient::new("not a url", timeouts()).err().unwrap();
    assert!(matches!(err, UpstreamError::InvalidUrl(_)));
}

#[test]
fn new_rejects_cannot_be_a_base_url() {
    let err = UpstreamClient::new("mailto:ops@example.com", timeouts()).err().unwrap();
    assert!(matches!(err, UpstreamError::InvalidUrl(_)));
}

#[test]
fn endpoint_appends_segments_to_root() {
    let client = UpstreamClient::new("http://upstream.test", timeouts()).unwrap();
    let url = client.endpoint(PRODUCT_PATH).unwrap();
    assert_eq!(url.as_str(), "http://upstream.test/web/v1/product");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = UpstreamClient::new("http://upstream.test/gateway", timeouts()).unwrap();
    let url = client.endpoint(PRODUCTS_PATH).unwrap();
    assert_eq!(url.as_str(), "http://upstream.test/gateway/web/v1/products");
}

#[test]
fn endpoint_encodes_id_as_single_segment() {
    let client = UpstreamClient::new("http://upstream.test", timeouts()).unwrap();
    let url = client.endpoint(PRODUCT_PATH.into_iter().chain(["a/b c"])).unwrap();
    assert_eq!(url.as_str(), "http://upstream.test/web/v1/product/a%2Fb%20c");
}

// =============================================================================
// decode_body
// =============================================================================

#[test]
fn decode_body_parses_json() {
    assert_eq!(decode_body(r#"{"ok":true}"#).unwrap(), json!({ "ok": true }));
}

#[test]
fn decode_body_empty_is_null() {
    assert_eq!(decode_body("").unwrap(), Value::Null);
    assert_eq!(decode_body("  \n").unwrap(), Value::Null);
}

#[test]
fn decode_body_rejects_non_json() {
    assert!(matches!(decode_body("<html>"), Err(UpstreamError::Parse(_))));
}

// =============================================================================
// round trips against a local upstream
// =============================================================================

#[tokio::test]
async fn get_product_sends_product_id_query() {
    let base = spawn_upstream(echo_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let body = client.get_product("p-42").await.unwrap();
    assert_eq!(body, json!({ "query": "product_id=p-42" }));
}

#[tokio::test]
async fn create_product_posts_json_body() {
    let base = spawn_upstream(echo_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let payload = json!({ "product_title": "Shirt", "product_price": 100_000 });
    let body = client.create_product(payload.clone()).await.unwrap();
    assert_eq!(body, json!({ "created": payload }));
}

#[tokio::test]
async fn update_product_puts_json_body() {
    let base = spawn_upstream(echo_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let payload = json!({ "product_id": "p-1", "product_title": "Hat" });
    let body = client.update_product(payload.clone()).await.unwrap();
    assert_eq!(body, json!({ "updated": payload }));
}

#[tokio::test]
async fn delete_product_uses_path_segment() {
    let base = spawn_upstream(echo_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let body = client.delete_product("p 7").await.unwrap();
    assert_eq!(body, json!({ "deleted": "p 7" }));
}

#[tokio::test]
async fn list_products_forwards_params_in_order() {
    let base = spawn_upstream(echo_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let params = vec![
        ("page".to_owned(), "2".to_owned()),
        ("limit".to_owned(), "5".to_owned()),
        ("search".to_owned(), "kaos".to_owned()),
    ];
    let body = client.list_products(params).await.unwrap();
    assert_eq!(body["query"], json!("page=2&limit=5&search=kaos"));
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let base = spawn_upstream(failing_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let err = client.list_products(Vec::new()).await.unwrap_err();
    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_route_maps_to_status_error() {
    let base = spawn_upstream(failing_router()).await;
    let client = UpstreamClient::new(&base, timeouts()).unwrap();

    let err = client.get_product("p-1").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_upstream_maps_to_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = UpstreamClient::new(&format!("http://{addr}"), timeouts()).unwrap();
    let err = client.get_product("p-1").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}
