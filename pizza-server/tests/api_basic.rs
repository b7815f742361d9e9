mod common;

use axum::body::Body;
use common::TestApp;
use http::{Method, Request, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn health_always_ok() {
    let app = TestApp::new().await;
    let res = app.get("/api/health").await;

    assert_eq!(res.status, StatusCode::OK);
    res.assert_success_matches_status();
    assert_eq!(res.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(res.body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(res.body["message"].is_string());
}

#[tokio::test]
async fn health_ok_even_with_database_closed() {
    let app = TestApp::new().await;
    app.state.db.close().await;
    assert_eq!(app.get("/api/health").await.status, StatusCode::OK);
    assert_eq!(app.get("/api/test").await.status, StatusCode::OK);
}

#[tokio::test]
async fn get_test_returns_fixed_body() {
    let app = TestApp::new().await;
    let res = app.get("/api/test").await;

    assert_eq!(res.status, StatusCode::OK);
    res.assert_success_matches_status();
    assert!(res.body["message"].is_string());
    assert!(res.body["timestamp"].is_string());
}

#[tokio::test]
async fn post_test_echoes_body() {
    let app = TestApp::new().await;
    let payload = json!({ "pizza": "Margherita", "adet": 2, "ekstra": ["mantar"] });
    let res = app.post("/api/test", payload.clone()).await;

    assert_eq!(res.status, StatusCode::OK);
    res.assert_success_matches_status();
    assert_eq!(res.body["data"], payload);
}

#[tokio::test]
async fn post_test_with_unreadable_json_is_500() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/test")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.send(request).await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    res.assert_success_matches_status();
    assert!(res.body["message"].is_string());
    assert!(res.body["error"].is_string());
}

#[tokio::test]
async fn unknown_route_is_enveloped_404() {
    let app = TestApp::new().await;
    let res = app.get("/api/nope").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    res.assert_success_matches_status();
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() {
    let app = TestApp::new().await;
    let res = app.get("/api/health").await;
    let generated = res.headers.get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "siparis-42")
        .body(Body::empty())
        .unwrap();
    let res = app.send(request).await;
    assert_eq!(res.headers.get("x-request-id").unwrap(), "siparis-42");
}

#[tokio::test]
async fn wrong_method_is_enveloped_405() {
    let app = TestApp::new().await;
    let cases = [
        (Method::DELETE, "/api/health"),
        (Method::GET, "/api/pizza/auth/logout"),
        (Method::PATCH, "/api/v2/pizza/menu"),
        (Method::PUT, "/api/test"),
    ];

    for (method, path) in cases {
        let res = app.request(method.clone(), path, None, None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        res.assert_success_matches_status();
        assert_eq!(res.body["code"], "METHOD_NOT_ALLOWED");
    }
}

#[tokio::test]
async fn oversized_body_is_enveloped_413() {
    let app = TestApp::new().await;

    for path in ["/api/test", "/api/paytr/create-token", "/api/v2/pizza/menu"] {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(vec![b' '; 3 * 1024 * 1024]))
            .unwrap();
        let res = app.send(request).await;

        assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE, "{path}");
        res.assert_success_matches_status();
        assert_eq!(res.body["code"], "PAYLOAD_TOO_LARGE");
    }
}
