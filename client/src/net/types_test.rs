use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn make_product() -> Product {
    serde_json::from_value(json!({
        "product_id": 7,
        "product_title": "Kaos Polos",
        "product_price": 75000,
        "product_description": "Cotton tee",
        "product_category": "Apparel",
        "product_image": "https://img.example/kaos.png",
        "created_at": "2024-05-01T00:00:00Z"
    }))
    .unwrap()
}

fn make_user() -> User {
    User {
        uid: "uid-1".to_owned(),
        email: Some("admin@example.com".to_owned()),
        display_name: None,
        id_token: "id.token.value".to_owned(),
        refresh_token: "refresh-value".to_owned(),
    }
}

// =============================================================
// ProductId
// =============================================================

#[test]
fn product_id_accepts_number_and_string() {
    let n: ProductId = serde_json::from_value(json!(42)).unwrap();
    let s: ProductId = serde_json::from_value(json!("abc-1")).unwrap();
    assert_eq!(n, ProductId::Number(42));
    assert_eq!(s, ProductId::Text("abc-1".to_owned()));
    assert_eq!(n.to_string(), "42");
    assert_eq!(s.to_string(), "abc-1");
}

#[test]
fn product_id_keeps_original_representation() {
    assert_eq!(serde_json::to_value(ProductId::Number(3)).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(ProductId::Text("3".into())).unwrap(), json!("3"));
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_parses_known_fields_and_keeps_extras() {
    let product = make_product();
    assert_eq!(product.product_id, ProductId::Number(7));
    assert_eq!(product.product_title, "Kaos Polos");
    assert!((product.product_price - 75_000.0).abs() < f64::EPSILON);
    assert_eq!(product.product_category.as_deref(), Some("Apparel"));
    assert_eq!(product.extra.get("created_at"), Some(&json!("2024-05-01T00:00:00Z")));
}

#[test]
fn product_optional_fields_default_to_none() {
    let product: Product = serde_json::from_value(json!({ "product_id": "p-1", "product_title": "Hat" })).unwrap();
    assert!(product.product_description.is_none());
    assert!(product.product_image.is_none());
    assert!(product.product_price.abs() < f64::EPSILON);
}

#[test]
fn product_price_accepts_numeric_string() {
    let product: Product =
        serde_json::from_value(json!({ "product_id": 1, "product_price": " 1500.5 " })).unwrap();
    assert!((product.product_price - 1500.5).abs() < f64::EPSILON);
}

#[test]
fn product_price_rejects_garbage() {
    let result = serde_json::from_value::<Product>(json!({ "product_id": 1, "product_price": "cheap" }));
    assert!(result.is_err());
}

#[test]
fn product_serializes_integral_price_as_integer() {
    let value = serde_json::to_value(make_product()).unwrap();
    assert_eq!(value["product_price"], json!(75000));
    assert_eq!(value["created_at"], json!("2024-05-01T00:00:00Z"));
}

#[test]
fn product_serializes_fractional_price_as_float() {
    let mut product = make_product();
    product.product_price = 12.5;
    let value = serde_json::to_value(product).unwrap();
    assert_eq!(value["product_price"], json!(12.5));
}

// =============================================================
// ProductDraft
// =============================================================

#[test]
fn draft_serializes_all_form_fields() {
    let draft = ProductDraft {
        product_title: "Shirt".to_owned(),
        product_price: 100_000.0,
        product_description: String::new(),
        product_category: String::new(),
        product_image: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({
            "product_title": "Shirt",
            "product_price": 100_000,
            "product_description": "",
            "product_category": "",
            "product_image": ""
        })
    );
}

#[test]
fn draft_merge_keeps_id_and_extra_fields() {
    let original = make_product();
    let draft = ProductDraft {
        product_title: "Kaos Premium".to_owned(),
        product_price: 99_000.0,
        product_description: "Combed cotton".to_owned(),
        product_category: "Apparel".to_owned(),
        product_image: String::new(),
    };
    let merged = draft.merge_into(&original);
    assert_eq!(merged.product_id, original.product_id);
    assert_eq!(merged.product_title, "Kaos Premium");
    assert_eq!(merged.product_image.as_deref(), Some(""));
    assert_eq!(merged.extra, original.extra);
}

// =============================================================
// ProductPage
// =============================================================

#[test]
fn product_page_parses_data_and_total() {
    let page: ProductPage = serde_json::from_value(json!({
        "data": [{ "product_id": 1, "product_title": "A" }],
        "pagination": { "total": 12, "page": 1, "limit": 5 }
    }))
    .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total, 12);
    assert_eq!(page.pagination.limit, Some(5));
}

#[test]
fn product_page_accepts_string_total() {
    let page: ProductPage = serde_json::from_value(json!({ "data": [], "pagination": { "total": "3" } })).unwrap();
    assert_eq!(page.pagination.total, 3);
}

#[test]
fn product_page_keeps_row_with_null_title() {
    let page: ProductPage = serde_json::from_value(json!({
        "data": [
            { "product_id": 1, "product_title": null, "product_price": 1000, "product_description": null },
            { "product_id": 2, "product_title": "Topi", "product_price": 2000 }
        ],
        "pagination": { "total": 2 }
    }))
    .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].product_title, "");
    assert!(page.data[0].product_description.is_none());
    assert_eq!(page.data[1].product_title, "Topi");
}

#[test]
fn product_page_skips_rows_without_id() {
    let page: ProductPage = serde_json::from_value(json!({
        "data": [
            { "product_title": "Orphan", "product_price": 10 },
            { "product_id": null, "product_title": "Null id" },
            { "product_id": "p-3", "product_title": "Kept" }
        ],
        "pagination": { "total": 3 }
    }))
    .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].product_id, ProductId::Text("p-3".to_owned()));
    assert_eq!(page.pagination.total, 3);
}

#[test]
fn product_page_null_data_is_empty() {
    let page: ProductPage = serde_json::from_value(json!({ "data": null, "pagination": { "total": 0 } })).unwrap();
    assert!(page.data.is_empty());
}

#[test]
fn product_page_requires_pagination() {
    assert!(serde_json::from_value::<ProductPage>(json!({ "data": [] })).is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_label_prefers_display_name_then_email() {
    let mut user = make_user();
    assert_eq!(user.label(), "admin@example.com");
    user.display_name = Some("Admin".to_owned());
    assert_eq!(user.label(), "Admin");
    user.display_name = None;
    user.email = None;
    assert_eq!(user.label(), "uid-1");
}

#[test]
fn user_debug_redacts_tokens() {
    let rendered = format!("{:?}", make_user());
    assert!(rendered.contains("uid-1"));
    assert!(!rendered.contains("id.token.value"));
    assert!(!rendered.contains("refresh-value"));
}

#[test]
fn user_serde_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let restored: User = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, user);
}
