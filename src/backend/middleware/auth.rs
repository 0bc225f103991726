/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and validates the JWT from the
 * Authorization header, resolves the subject to a stored user and attaches
 * that user to the request for handlers.
 *
 * Any failure yields the same 401 body:
 *
 * ```json
 * {
 *   "status": 401,
 *   "error": "Unauthorized",
 *   "message": "Full authentication is required to access this resource",
 *   "path": "/api/session"
 * }
 * ```
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::tokens::TokenValidator;
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::server::state::AppState;
use crate::backend::store::{CredentialLookup, StoreError, User};

const ENTRY_POINT_MESSAGE: &str = "Full authentication is required to access this resource";

/// Authenticated principal, resolved from the token subject
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    /// Login identifier (the token subject)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            admin: user.admin,
        }
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|token| !token.is_empty())
}

/// Resolve a bearer token to a principal
///
/// Returns `Ok(None)` when the token is invalid or its subject no longer
/// matches a stored user. Only store failures are errors.
pub async fn resolve_principal<L, V>(
    lookup: &L,
    validator: &V,
    token: &str,
) -> Result<Option<AuthenticatedUser>, StoreError>
where
    L: CredentialLookup + ?Sized,
    V: TokenValidator + ?Sized,
{
    if !validator.validate(token) {
        tracing::warn!("Invalid token");
        return Ok(None);
    }

    let subject = match validator.extract_subject(token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::warn!("Cannot read token subject: {}", e);
            return Ok(None);
        }
    };

    let user = lookup.find_user_by_email(&subject).await?;
    if user.is_none() {
        tracing::warn!("Token subject has no account: {}", subject);
    }
    Ok(user.map(AuthenticatedUser::from))
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Validates the token
/// 3. Looks up the user named by the token subject
/// 4. Attaches the user to request extensions for use in handlers
///
/// Returns 401 with the entry-point body if any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    let Some(token) = token else {
        tracing::warn!("Missing or malformed Authorization header on {}", path);
        return unauthorized(path);
    };

    let principal = match resolve_principal(
        app_state.store.as_ref(),
        app_state.token_validator.as_ref(),
        &token,
    )
    .await
    {
        Ok(Some(principal)) => principal,
        Ok(None) => return unauthorized(path),
        Err(e) => return BackendError::from(e).into_response(),
    };

    tracing::debug!("Authenticated {} for {}", principal.email, path);
    request.extensions_mut().insert(principal);

    next.run(request).await
}

fn unauthorized(path: String) -> Response {
    ErrorBody::new(StatusCode::UNAUTHORIZED, ENTRY_POINT_MESSAGE)
        .with_path(path)
        .into_response()
}

/// Axum extractor for authenticated user
///
/// Reads the principal that [`auth_middleware`] attached to the request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(ENTRY_POINT_MESSAGE)
            })?;

        Ok(AuthUser(user))
    }
}
