//! Custom assertion macros and utilities
//!
//! Provides assertions on the JSON error body returned by the API.

use axum::http::StatusCode;
use serde_json::Value;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that `body` is an error body for `status`
pub fn assert_error_body(body: &Value, status: StatusCode) {
    assert_eq!(body["status"], status.as_u16(), "unexpected error body: {}", body);
    assert_eq!(
        body["error"],
        status.canonical_reason().unwrap_or_default(),
        "unexpected error body: {}",
        body
    );
    assert!(body["message"].is_string(), "error body has no message: {}", body);
}

/// Assert that `body` is the 401 returned by the authentication gate for `path`
pub fn assert_entry_point_body(body: &Value, path: &str) {
    assert_error_body(body, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Full authentication is required to access this resource"
    );
    assert_eq!(body["path"], path);
}
