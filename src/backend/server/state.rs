/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The store, behind the `Store` capability trait
 * - The session participation service
 * - The token issuer and validator
 * - The bcrypt cost used at registration
 *
 * Nothing in here is mutable; all shared mutable data lives in the store.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use yoga_app::backend::sessions::SessionService;
 *
 * async fn handler(State(sessions): State<SessionService>) {
 *     let _ = sessions.find_all().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::tokens::{JwtTokens, TokenIssuer, TokenValidator};
use crate::backend::sessions::SessionService;
use crate::backend::store::Store;
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users, teachers and sessions
    pub store: Arc<dyn Store>,

    /// Join/leave and CRUD on sessions
    pub sessions: SessionService,

    /// Signs tokens at login
    pub token_issuer: Arc<dyn TokenIssuer>,

    /// Checks tokens in the authentication gate
    pub token_validator: Arc<dyn TokenValidator>,

    /// Work factor for hashing new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from a store and the loaded configuration
    pub fn new(store: Arc<dyn Store>, config: &AppConfig) -> Self {
        let tokens = Arc::new(JwtTokens::new(&config.jwt_secret, config.jwt_expiration_ms));
        Self {
            sessions: SessionService::new(store.clone()),
            store,
            token_issuer: tokens.clone(),
            token_validator: tokens,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Lets handlers take `State<Arc<dyn Store>>` directly
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Lets handlers take `State<SessionService>` directly
impl FromRef<AppState> for SessionService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
