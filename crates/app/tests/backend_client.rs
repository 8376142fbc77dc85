//! Integration tests for `BackendClient` against a wiremock backend.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roastery::coupons::CouponTarget;
use roastery_app::backend::BackendClient;

fn client(server: &MockServer) -> BackendClient {
    BackendClient::new(&server.uri()).expect("client construction should not fail")
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

#[tokio::test]
async fn coupon_is_fetched_lowercased() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coupons/brew15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "brew15",
            "description": "15% off beans",
            "discountPercent": 15,
            "target": "subtotal"
        })))
        .mount(&server)
        .await;

    let payload = client(&server)
        .coupon("BREW15")
        .await
        .expect("request should succeed")
        .expect("coupon should exist");

    assert_eq!(payload.code, "brew15");

    let coupon = payload.into_coupon();
    assert_eq!(coupon.discount_percent, dec("15"));
    assert_eq!(coupon.target, CouponTarget::Subtotal);
}

#[tokio::test]
async fn unknown_coupon_maps_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coupons/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server).coupon("nope").await.expect("request should succeed");

    assert!(result.is_none(), "a 404 coupon is invalid, not an error");
}

#[tokio::test]
async fn coupon_without_target_defaults_to_subtotal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coupons/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "plain",
            "description": "plain discount",
            "discountPercent": 5
        })))
        .mount(&server)
        .await;

    let coupon = client(&server)
        .coupon("plain")
        .await
        .expect("request should succeed")
        .expect("coupon should exist")
        .into_coupon();

    assert_eq!(coupon.target, CouponTarget::Subtotal);
}

#[tokio::test]
async fn delivery_options_parse() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deliveryOptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "standard", "label": "Standard (2-4 days)", "fee": 7.9 },
            { "id": "express", "label": "Express (next day)", "fee": 12.5 }
        ])))
        .mount(&server)
        .await;

    let options = client(&server)
        .delivery_options()
        .await
        .expect("request should succeed");

    assert_eq!(options.len(), 2);
    assert_eq!(options.first().map(|o| o.fee), Some(dec("7.9")));
}

#[tokio::test]
async fn missing_product_reads_as_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/phantom"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server)
        .product("phantom")
        .await
        .expect("request should succeed");

    assert!(result.is_none(), "a missing product has unlimited stock");
}

#[tokio::test]
async fn product_stock_field_is_optional() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/house"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "house",
            "name": "House Blend"
        })))
        .mount(&server)
        .await;

    let product = client(&server)
        .product("house")
        .await
        .expect("request should succeed")
        .expect("product should exist");

    assert_eq!(product.stock, None);
}

#[tokio::test]
async fn update_stock_patches_the_product() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/products/ethiopia"))
        .and(body_json(json!({ "stock": 8 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ethiopia",
            "name": "Ethiopia Roast",
            "stock": 8
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_stock("ethiopia", 8)
        .await
        .expect("patch should succeed");
}

#[tokio::test]
async fn failed_order_post_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let order: roastery_app::backend::NewOrder = serde_json::from_value(json!({
        "items": [{ "id": "ethiopia", "qty": 1 }],
        "pricing": {
            "subTotal": 12.5,
            "subTotalAfterCoupon": 12.5,
            "deliveryMode": "delivery",
            "deliveryFee": 7.9,
            "tip": 0.0,
            "serviceFee": 1.5,
            "tax": 0.88,
            "credits": 0.0,
            "coupon": null,
            "total": 22.78
        },
        "createdAt": "2025-06-01T12:00:00Z"
    }))
    .expect("order payload should deserialise");

    let result = client(&server).place_order(&order).await;

    assert!(result.is_err(), "a non-2xx order response must fail checkout");
}
