//! End-to-end HTTP tests for the authentication surface
//!
//! Drives the real router (seeded demo identities, real codec, real layer)
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use warden_api::state::AuthServiceImpl;
use warden_api::{app, seed_demo_identities};
use warden_core::{AuthConfig, AuthService, MemoryIdentityStore};

fn test_app() -> (Router, Arc<AuthServiceImpl>) {
    let store = Arc::new(MemoryIdentityStore::new());
    seed_demo_identities(&store).unwrap();

    let config = AuthConfig::try_new("w".repeat(64)).unwrap();
    let auth = Arc::new(AuthService::new(&config, store).unwrap());
    (app(Arc::clone(&auth)), auth)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let response = login(app, username, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

async fn get(app: &Router, path: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_login_returns_token_with_matching_subject() {
    let (app, auth) = test_app();
    let token = login_token(&app, "user", "user").await;

    let claims = auth.codec().decode(&token).unwrap();
    assert_eq!(claims.sub, "user");
}

#[tokio::test]
async fn test_login_wrong_password_is_401_without_body() {
    let (app, _) = test_app();
    let response = login(&app, "user", "wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert!(bytes.is_empty(), "401 must not carry a body");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let (app, _) = test_app();

    // Same status, same (empty) body: no way to tell which field was wrong
    let unknown = login(&app, "ghost", "user").await;
    let wrong_pw = login(&app, "user", "ghost").await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_token_on_user_resource() {
    let (app, _) = test_app();
    let token = login_token(&app, "user", "user").await;

    let response = get(&app, "/secured/user", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "User resource" }));
}

#[tokio::test]
async fn test_user_token_on_admin_resource_is_403() {
    let (app, _) = test_app();
    let token = login_token(&app, "user", "user").await;

    let response = get(&app, "/secured/admin", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_token_on_admin_resource() {
    let (app, _) = test_app();
    let token = login_token(&app, "admin", "admin").await;

    let response = get(&app, "/secured/admin", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Admin resource" }));
}

#[tokio::test]
async fn test_either_role_admitted_on_shared_resource() {
    let (app, _) = test_app();

    for account in ["user", "admin"] {
        let token = login_token(&app, account, account).await;
        let response = get(&app, "/secured/resource/user-or-admin", Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK, "account {account}");
        assert_eq!(
            body_json(response).await,
            json!({ "message": "User or Admin resource" })
        );
    }
}

#[tokio::test]
async fn test_no_credential_is_401() {
    let (app, _) = test_app();

    for path in [
        "/secured/user",
        "/secured/admin",
        "/secured/resource/user-or-admin",
    ] {
        let response = get(&app, path, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path {path}");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_treated_as_absent() {
    let (app, _) = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/secured/user")
        .header(header::AUTHORIZATION, "Basic dXNlcjp1c2Vy")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_preflight_is_always_200() {
    let (app, _) = test_app();

    for path in ["/secured/admin", "/login", "/nowhere"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_health_routes_are_public() {
    let (app, _) = test_app();
    assert_eq!(get(&app, "/health", None).await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/ready", None).await.status(), StatusCode::OK);
}
