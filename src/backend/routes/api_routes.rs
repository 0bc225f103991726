/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Sessions (bearer token)
 * - `GET|POST /api/session`
 * - `GET|PUT|DELETE /api/session/{id}`
 * - `POST|DELETE /api/session/{id}/participate/{userId}`
 *
 * ## Teachers (bearer token)
 * - `GET /api/teacher`
 * - `GET /api/teacher/{id}`
 *
 * ## Users (bearer token)
 * - `GET|DELETE /api/user/{id}`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;
use crate::backend::{sessions, teachers, users};

/// Configure the public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Configure the routes that require an authenticated user
///
/// The caller is responsible for layering the authentication gate on top.
/// Collection paths also answer with a trailing slash.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Session endpoints
        .route(
            "/api/session",
            get(sessions::handlers::find_all).post(sessions::handlers::create),
        )
        .route(
            "/api/session/",
            get(sessions::handlers::find_all).post(sessions::handlers::create),
        )
        .route(
            "/api/session/{id}",
            get(sessions::handlers::find_by_id)
                .put(sessions::handlers::update)
                .delete(sessions::handlers::delete),
        )
        .route(
            "/api/session/{id}/participate/{user_id}",
            post(sessions::handlers::participate).delete(sessions::handlers::no_longer_participate),
        )
        // Teacher endpoints
        .route("/api/teacher", get(teachers::find_all))
        .route("/api/teacher/", get(teachers::find_all))
        .route("/api/teacher/{id}", get(teachers::find_by_id))
        // User endpoints
        .route(
            "/api/user/{id}",
            get(users::handlers::find_by_id).delete(users::handlers::delete),
        )
}
