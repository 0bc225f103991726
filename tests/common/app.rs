//! Application test fixture
//!
//! Builds the real router over a seeded in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is opened.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use yoga_app::backend::server::config::seeded_memory_store;
use yoga_app::backend::server::create_app_with_store;
use yoga_app::backend::store::MemoryStore;
use yoga_app::shared::AppConfig;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "test-jwt-secret";

/// Token lifetime used by every test app (one day)
pub const TEST_EXPIRATION_MS: u64 = 86_400_000;

/// A running application and direct access to its store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub config: AppConfig,
}

/// Status and JSON body of a response (`Value::Null` for an empty body)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// App over a fresh store holding only the seed teachers
    pub async fn new() -> Self {
        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .jwt_expiration_ms(TEST_EXPIRATION_MS)
            .bcrypt_cost(4)
            .build()
            .expect("valid test configuration");
        let store = Arc::new(seeded_memory_store().await.expect("seeded store"));
        let router = create_app_with_store(store.clone(), &config);
        Self {
            router,
            store,
            config,
        }
    }

    /// Send a request, optionally with a bearer token and a JSON body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        self.send(request).await
    }

    /// Send a prepared request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
        self.request(Method::POST, uri, token, body).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}
