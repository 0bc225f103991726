/**
 * Server Initialization
 *
 * Builds the Axum application from the loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Load the store (PostgreSQL or in-memory)
 * 2. Create the application state (services, token service)
 * 3. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{Store, StoreError};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if a configured database cannot be reached or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing yoga backend server");

    let store = load_store(config).await?;
    let app = create_app_with_store(store, config);

    tracing::info!("Router configured");
    Ok(app)
}

/// Create the application over an already built store
pub fn create_app_with_store(store: Arc<dyn Store>, config: &AppConfig) -> Router {
    create_router(AppState::new(store, config))
}
