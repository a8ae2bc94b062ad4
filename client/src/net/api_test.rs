use super::*;
use serde_json::json;

fn shirt_draft() -> ProductDraft {
    ProductDraft {
        product_title: "Shirt".to_owned(),
        product_price: 100_000.0,
        product_description: String::new(),
        product_category: String::new(),
        product_image: String::new(),
    }
}

#[test]
fn first_page_query_has_page_limit_and_empty_search() {
    let request = list_products_request(1, 5, "");
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.query,
        vec![("page", "1".to_owned()), ("limit", "5".to_owned()), ("search", String::new())]
    );
    assert_eq!(request.path, "/api/products");
    assert!(request.body.is_none());
}

#[test]
fn search_term_is_carried_unencoded() {
    let request = list_products_request(2, 5, "kaos & celana");
    assert_eq!(request.query[0], ("page", "2".to_owned()));
    assert_eq!(request.query[2], ("search", "kaos & celana".to_owned()));
}

#[test]
fn create_request_posts_form_values() {
    let request = create_product_request(&shirt_draft());
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/product");
    assert!(request.query.is_empty());
    let body = request.body.unwrap();
    assert_eq!(body["product_title"], json!("Shirt"));
    assert_eq!(body["product_price"], json!(100_000));
}

#[test]
fn update_request_puts_full_record() {
    let product: Product = serde_json::from_value(json!({
        "product_id": 9,
        "product_title": "Hat",
        "product_price": 5000,
        "sku": "H-9"
    }))
    .unwrap();
    let request = update_product_request(&product);
    assert_eq!(request.method, Method::Put);
    let body = request.body.unwrap();
    assert_eq!(body["product_id"], json!(9));
    assert_eq!(body["sku"], json!("H-9"));
}

#[test]
fn delete_request_carries_id_in_query() {
    let request = delete_product_request(&ProductId::Text("p 1".to_owned()));
    assert_eq!(request.method, Method::Delete);
    assert!(request.body.is_none());
    assert_eq!(request.path, "/api/product");
    assert_eq!(request.query, vec![("product_id", "p 1".to_owned())]);
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(Method::Put, 500), "Put request failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_json_is_unavailable_on_server() {
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    let request = list_products_request(1, 5, "");
    let mut future = std::pin::pin!(send_json(&request));
    let mut cx = Context::from_waker(Waker::noop());
    assert_eq!(
        future.as_mut().poll(&mut cx),
        Poll::Ready(Err("not available on server".to_owned()))
    );
}
