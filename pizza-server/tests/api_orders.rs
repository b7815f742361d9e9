mod common;

use common::TestApp;
use http::{Method, StatusCode};
use serde_json::{Value, json};

async fn menu_id(app: &TestApp, name: &str) -> i64 {
    let res = app.get("/api/v2/pizza/menu").await;
    res.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == name)
        .and_then(|i| i["id"].as_i64())
        .unwrap()
}

fn order_body(items: Value) -> Value {
    json!({
        "customer_name": "Ayşe Yılmaz",
        "customer_phone": "0555 000 00 00",
        "delivery_address": "Moda Cd. No:1, Kadıköy",
        "items": items
    })
}

#[tokio::test]
async fn create_computes_total_from_menu_prices() {
    let app = TestApp::new().await;
    let margherita = menu_id(&app, "Margherita").await;
    let ayran = menu_id(&app, "Ayran").await;

    let res = app
        .post(
            "/api/v2/pizza/orders",
            order_body(json!([
                { "menu_item_id": margherita, "quantity": 2 },
                { "menu_item_id": ayran, "quantity": 1 }
            ])),
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    res.assert_success_matches_status();
    let order = &res.body["data"];
    assert_eq!(order["status"], "pending");
    assert_eq!(order["total"], 404.7);
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["items"][0]["name"], "Margherita");
    assert_eq!(order["items"][0]["unit_price"], 189.9);
}

#[tokio::test]
async fn later_price_changes_do_not_touch_existing_orders() {
    let app = TestApp::new().await;
    let kola = menu_id(&app, "Kola").await;

    let created = app
        .post(
            "/api/v2/pizza/orders",
            order_body(json!([{ "menu_item_id": kola, "quantity": 3 }])),
        )
        .await;
    let id = created.body["data"]["id"].as_i64().unwrap();

    app.request(
        Method::PUT,
        &format!("/api/v2/pizza/menu/{kola}"),
        Some(json!({ "price": 99.0 })),
        None,
    )
    .await;

    let fetched = app.get(&format!("/api/v2/pizza/orders/{id}")).await;
    assert_eq!(fetched.body["data"]["total"], 119.7);
    assert_eq!(fetched.body["data"]["items"][0]["unit_price"], 39.9);
}

#[tokio::test]
async fn unknown_item_is_400_and_writes_nothing() {
    let app = TestApp::new().await;
    let margherita = menu_id(&app, "Margherita").await;

    let res = app
        .post(
            "/api/v2/pizza/orders",
            order_body(json!([
                { "menu_item_id": margherita, "quantity": 1 },
                { "menu_item_id": 987654, "quantity": 1 }
            ])),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    res.assert_success_matches_status();

    let list = app.get("/api/v2/pizza/orders").await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unavailable_item_is_400() {
    let app = TestApp::new().await;
    let sucuklu = menu_id(&app, "Sucuklu").await;
    app.request(
        Method::PUT,
        &format!("/api/v2/pizza/menu/{sucuklu}"),
        Some(json!({ "is_available": false })),
        None,
    )
    .await;

    let res = app
        .post(
            "/api/v2/pizza/orders",
            order_body(json!([{ "menu_item_id": sucuklu, "quantity": 1 }])),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = TestApp::new().await;
    let res = app
        .post("/api/v2/pizza/orders", json!({ "customer_name": "Ali" }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    res.assert_success_matches_status();

    let res = app.post("/api/v2/pizza/orders", order_body(json!([]))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_is_written_directly_then_order_deleted() {
    let app = TestApp::new().await;
    let margherita = menu_id(&app, "Margherita").await;
    let created = app
        .post(
            "/api/v2/pizza/orders",
            order_body(json!([{ "menu_item_id": margherita, "quantity": 1 }])),
        )
        .await;
    let id = created.body["data"]["id"].as_i64().unwrap();
    let status_path = format!("/api/v2/pizza/orders/{id}/status");

    for status in ["delivered", "preparing", "on_the_way", "cancelled"] {
        let res = app
            .request(Method::PUT, &status_path, Some(json!({ "status": status })), None)
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["data"]["status"], status);
    }

    let bad = app
        .request(Method::PUT, &status_path, Some(json!({ "status": "yenildi" })), None)
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let path = format!("/api/v2/pizza/orders/{id}");
    let deleted = app.request(Method::DELETE, &path, None, None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(app.get(&path).await.status, StatusCode::NOT_FOUND);

    let missing = app
        .request(Method::PUT, &status_path, Some(json!({ "status": "pending" })), None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    missing.assert_success_matches_status();
}
