/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public authentication routes
 * 2. API routes behind the authentication gate (`route_layer`, so unknown
 *    paths never reach the gate)
 * 3. Fallback handler (404 with the standard error body)
 * 4. `TraceLayer` around everything
 */

use axum::{http::StatusCode, middleware, response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::ErrorBody;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store and services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = configure_api_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.clone(), auth_middleware),
    );

    configure_auth_routes(Router::new())
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found(uri: axum::http::Uri) -> impl IntoResponse {
    ErrorBody::new(StatusCode::NOT_FOUND, "No handler found").with_path(uri.path())
}
