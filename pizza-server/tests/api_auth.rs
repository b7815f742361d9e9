mod common;

use common::TestApp;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_user_and_duplicate_is_409() {
    let app = TestApp::new().await;
    let body = json!({ "username": "kaymaz", "password": "pizza123", "display_name": "Kaymaz Usta", "role": "admin" });

    let first = app.post("/api/v2/pizza/users", body.clone()).await;
    assert_eq!(first.status, StatusCode::CREATED);
    first.assert_success_matches_status();
    assert_eq!(first.body["data"]["role"], "admin");
    assert!(first.body["data"].get("password_hash").is_none());

    let second = app.post("/api/v2/pizza/users", body).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["code"], "CONFLICT");
    second.assert_success_matches_status();
}

#[tokio::test]
async fn user_list_get_and_delete() {
    let app = TestApp::new().await;
    let created = app
        .post("/api/v2/pizza/users", json!({ "username": "elif", "password": "sifre123" }))
        .await;
    let id = created.body["data"]["id"].as_i64().unwrap();
    assert_eq!(created.body["data"]["display_name"], "elif");
    assert_eq!(created.body["data"]["role"], "customer");

    let list = app.get("/api/v2/pizza/users").await;
    assert_eq!(list.body["data"].as_array().unwrap().len(), 1);

    let path = format!("/api/v2/pizza/users/{id}");
    assert_eq!(app.get(&path).await.status, StatusCode::OK);
    assert_eq!(
        app.request(Method::DELETE, &path, None, None).await.status,
        StatusCode::OK
    );
    assert_eq!(app.get(&path).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_sets_cookie_and_me_resolves_session() {
    let app = TestApp::new().await;
    app.post("/api/v2/pizza/users", json!({ "username": "can", "password": "margarita" }))
        .await;

    let login = app
        .post("/api/pizza/auth/login", json!({ "username": "can", "password": "margarita" }))
        .await;
    assert_eq!(login.status, StatusCode::OK);
    login.assert_success_matches_status();
    assert_eq!(login.body["data"]["username"], "can");

    let set_cookie = login.set_cookie();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(!set_cookie.contains("Secure"));

    let cookie = login.cookie().unwrap();
    let me = app
        .request(Method::GET, "/api/pizza/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["username"], "can");
}

#[tokio::test]
async fn production_cookie_is_secure() {
    let app = TestApp::with_config(|config| config.environment = "production".into()).await;
    app.post("/api/v2/pizza/users", json!({ "username": "prod", "password": "123456" }))
        .await;
    let login = app
        .post("/api/pizza/auth/login", json!({ "username": "prod", "password": "123456" }))
        .await;
    assert!(login.set_cookie().contains("Secure"));
}

#[tokio::test]
async fn wrong_credentials_are_401() {
    let app = TestApp::new().await;
    app.post("/api/v2/pizza/users", json!({ "username": "deniz", "password": "dogru-sifre" }))
        .await;

    let wrong = app
        .post("/api/pizza/auth/login", json!({ "username": "deniz", "password": "yanlis" }))
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["code"], "INVALID_CREDENTIALS");
    wrong.assert_success_matches_status();
    assert!(wrong.cookie().is_none());

    let unknown = app
        .post("/api/pizza/auth/login", json!({ "username": "kimse", "password": "yanlis" }))
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["error"], wrong.body["error"]);

    let empty = app
        .post("/api/pizza/auth/login", json!({ "username": "", "password": "" }))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_without_session_is_401() {
    let app = TestApp::new().await;
    let res = app.get("/api/pizza/auth/me").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    res.assert_success_matches_status();

    let res = app
        .request(Method::GET, "/api/pizza/auth/me", None, Some("auth-token=sahte"))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_always_clears_cookie() {
    let app = TestApp::new().await;

    // No session at all
    let anonymous = app
        .request(Method::POST, "/api/pizza/auth/logout", None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::OK);
    anonymous.assert_success_matches_status();
    assert!(anonymous.set_cookie().starts_with("auth-token=;"));
    assert!(anonymous.set_cookie().contains("Max-Age=0"));

    // Real session, ended once, then the stale cookie again
    let cookie = app.login_as("selin", "sifre123").await;
    for _ in 0..2 {
        let res = app
            .request(Method::POST, "/api/pizza/auth/logout", None, Some(&cookie))
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.set_cookie().contains("Max-Age=0"));
    }

    let me = app
        .request(Method::GET, "/api/pizza/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}
