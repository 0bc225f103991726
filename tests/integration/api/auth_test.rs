//! Authentication API integration tests
//!
//! Tests for registration, login and the register → login → protected call
//! round trip.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{assert_error_body, create_test_user, test_tokens, TestApp};
use yoga_app::backend::auth::tokens::TokenValidator;
use yoga_app::backend::store::{CredentialLookup, UserStore};

fn signup_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "firstName": "toto",
        "lastName": "toto",
        "password": "test!1234"
    })
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/auth/register", None, Some(signup_body("toto@toto.com")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "User registered successfully!"}));

    let user = app.store.find_user_by_email("toto@toto.com").await.unwrap().unwrap();
    assert!(!user.admin);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    create_test_user(&app, "toto@toto.com", "test!1234", false).await;

    let response = app
        .post("/api/auth/register", None, Some(signup_body("toto@toto.com")))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response.body, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Error: Email is already taken!");
}

#[tokio::test]
async fn test_register_invalid_payload() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            Some(json!({"email": "toto@toto.com", "firstName": "to", "lastName": "toto", "password": "test!1234"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .post("/api/auth/register", None, Some(json!({"email": "toto@toto.com"})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response.body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "yoga@studio.com", "test!1234", true).await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            Some(json!({"email": "yoga@studio.com", "password": "test!1234"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "Bearer");
    assert_eq!(response.body["id"], user.id);
    assert_eq!(response.body["username"], "yoga@studio.com");
    assert_eq!(response.body["firstName"], "Test");
    assert_eq!(response.body["lastName"], "User");
    assert_eq!(response.body["admin"], true);

    let token = response.body["token"].as_str().unwrap();
    let tokens = test_tokens();
    assert!(tokens.validate(token));
    assert_eq!(tokens.extract_subject(token).unwrap(), "yoga@studio.com");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let app = TestApp::new().await;
    create_test_user(&app, "yoga@studio.com", "test!1234", false).await;

    for body in [
        json!({"email": "yoga@studio.com", "password": "wrong-password"}),
        json!({"email": "nobody@studio.com", "password": "test!1234"}),
    ] {
        let response = app.post("/api/auth/login", None, Some(body)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_error_body(&response.body, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Bad credentials");
    }
}

#[tokio::test]
async fn test_register_login_then_protected_call() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/auth/register", None, Some(signup_body("new@studio.com")))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .post(
            "/api/auth/login",
            None,
            Some(json!({"email": "new@studio.com", "password": "test!1234"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["admin"], false);
    let token = response.body["token"].as_str().unwrap().to_string();

    let response = app.get("/api/session", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_same_email() {
    let app = TestApp::new().await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = app.router.clone();
            let request = Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(signup_body("race@test.com").to_string()))
                .unwrap();
            tokio::spawn(async move { router.oneshot(request).await.unwrap().status() })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::OK || *s == StatusCode::BAD_REQUEST));
    assert!(app.store.find_user_by_email("race@test.com").await.unwrap().is_some());
    assert!(app.store.find_user_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_login_body() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response.body, StatusCode::BAD_REQUEST);
}
