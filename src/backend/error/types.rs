/**
 * Backend Error Types
 *
 * This module defines the errors raised by services and handlers.
 * They are raised where detected, propagated unchanged with `?`, and
 * translated to an HTTP status only in `conversion.rs`.
 *
 * # Error Categories
 *
 * - `NotFound` - A referenced session, user or teacher does not exist
 * - `BadRequest` - Malformed input or an invariant violation, such as an
 *   unparseable id or joining a session twice
 * - `Unauthorized` - The principal may not perform the requested mutation,
 *   or credentials are wrong
 * - `SharedError` - Payload validation failures
 * - `Store` / `Token` / `PasswordHash` - Infrastructure failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::tokens::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use yoga_app::backend::error::BackendError;
///
/// let err = BackendError::not_found("Session 12 not found");
/// assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Referenced entity is absent
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Malformed input or invariant violation
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// Principal lacks the rights for the request
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Persistence failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Token issuance failure
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Password hashing or verification failure
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404
    /// - `BadRequest`, `SharedError` - 400
    /// - `Unauthorized` - 401
    /// - `Store`, `Token`, `PasswordHash` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Store(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error message
    ///
    /// Infrastructure errors are reported generically; their details go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message }
            | Self::BadRequest { message }
            | Self::Unauthorized { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Store(_) | Self::Token(_) | Self::PasswordHash(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// Parse a path segment as a numeric id
///
/// Anything that is not a plain base-10 integer is a `BadRequest`.
pub fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.parse::<i64>()
        .map_err(|_| BackendError::bad_request(format!("Invalid id: {}", raw)))
}
