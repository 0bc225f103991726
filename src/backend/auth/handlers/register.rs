/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email format and field lengths
 * 2. Check if the email is already taken (the store re-checks on insert)
 * 3. Hash password using bcrypt
 * 4. Create user in the store (never an admin)
 * 5. Return a confirmation message
 *
 * Registration does not log the user in; the client calls login next.
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::backend::store::{NewUser, StoreError, UserStore};

const EMAIL_TAKEN: &str = "Error: Email is already taken!";

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state (store and bcrypt cost)
/// * `ApiJson(request)` - Signup request
///
/// # Errors
///
/// * `400 Bad Request` - If a field is invalid or the email is already taken
/// * `500 Internal Server Error` - If hashing or the store fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "yoga@studio.com",
///   "firstName": "Yoga",
///   "lastName": "Studio",
///   "password": "test!1234"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::info!("Register request for email: {}", request.email);

    request.validate()?;

    if state.store.user_exists_by_email(&request.email).await? {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::bad_request(EMAIL_TAKEN));
    }

    let password_hash = hash(&request.password, state.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        e
    })?;

    let user = state
        .store
        .create_user(NewUser {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: password_hash,
            admin: false,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail(email) => {
                tracing::warn!("Email taken while registering: {}", email);
                BackendError::bad_request(EMAIL_TAKEN)
            }
            other => other.into(),
        })?;

    tracing::info!("User created successfully: {} (id {})", user.email, user.id);

    Ok(Json(MessageResponse::new("User registered successfully!")))
}
