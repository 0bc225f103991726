//! User API integration tests
//!
//! Account lookup and the owner-only deletion rule.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_contains;
use crate::common::{assert_error_body, create_test_user, TestApp};
use yoga_app::backend::store::UserStore;

#[tokio::test]
async fn test_find_user_hides_password() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "user@test.com", "test!1234", false).await;

    let response = app.get(&format!("/api/user/{}", user.id), Some(&user.token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "user@test.com");
    assert_eq!(response.body["admin"], false);
    assert!(response.body.get("password").is_none());
    assert_contains!(response.body.to_string(), "createdAt");
}

#[tokio::test]
async fn test_find_user_errors() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "user@test.com", "test!1234", false).await;

    let response = app.get("/api/user/999", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/api/user/abc", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response.body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_deletes_own_account() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "user@test.com", "test!1234", false).await;

    let response = app.delete(&format!("/api/user/{}", user.id), Some(&user.token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.store.user_deletes(), 1);
    assert_eq!(app.store.find_user_by_id(user.id).await.unwrap(), None);

    // The token now names nobody
    let response = app.get("/api/session", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_someone_else_is_unauthorized() {
    let app = TestApp::new().await;
    let owner = create_test_user(&app, "owner@test.com", "test!1234", false).await;
    let other = create_test_user(&app, "other@test.com", "test!1234", true).await;

    let response = app.delete(&format!("/api/user/{}", owner.id), Some(&other.token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&response.body, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.user_deletes(), 0);
    assert!(app.store.find_user_by_id(owner.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_errors() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "user@test.com", "test!1234", false).await;

    let response = app.delete("/api/user/999", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.delete("/api/user/abc", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.store.user_deletes(), 0);
}

#[tokio::test]
async fn test_deleted_user_leaves_sessions() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "user@test.com", "test!1234", false).await;
    let admin = create_test_user(&app, "admin@test.com", "test!1234", true).await;

    let response = app
        .post(
            "/api/session",
            Some(&admin.token),
            Some(json!({
                "name": "Hatha",
                "date": "2024-09-12T10:00:00Z",
                "teacher_id": 1,
                "description": "Slow",
                "users": [user.id, admin.id]
            })),
        )
        .await;
    let id = response.body["id"].as_i64().unwrap();

    let response = app.delete(&format!("/api/user/{}", user.id), Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.get(&format!("/api/session/{}", id), Some(&admin.token)).await;
    assert_eq!(response.body["users"], json!([admin.id]));
}
