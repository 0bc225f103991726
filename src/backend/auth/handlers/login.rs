/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT for the email
 * 4. Return token and account info
 *
 * An unknown email and a wrong password produce the same 401.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{JwtResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::backend::store::CredentialLookup;

const BAD_CREDENTIALS: &str = "Bad credentials";

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (store and token issuer)
/// * `ApiJson(request)` - Login request containing email and password
///
/// # Errors
///
/// * `400 Bad Request` - If a field is blank
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store or token generation fails
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzUxMiJ9...",
///   "type": "Bearer",
///   "id": 1,
///   "username": "yoga@studio.com",
///   "firstName": "Admin",
///   "lastName": "Admin",
///   "admin": true
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<JwtResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    request.validate()?;

    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::unauthorized(BAD_CREDENTIALS)
        })?;

    let valid = verify(&request.password, &user.password).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        e
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::unauthorized(BAD_CREDENTIALS));
    }

    let token = state.token_issuer.issue(&user.email)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(JwtResponse {
        token,
        token_type: "Bearer".to_string(),
        id: user.id,
        username: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        admin: user.admin,
    }))
}
