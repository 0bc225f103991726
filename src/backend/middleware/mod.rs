//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Authentication gate for protected routes
//! - **`json`** - JSON body extractor with the standard 400 rejection
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use yoga_app::backend::middleware::auth_middleware;
//! use yoga_app::backend::server::state::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;
pub mod json;

pub use auth::{auth_middleware, bearer_token, resolve_principal, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
