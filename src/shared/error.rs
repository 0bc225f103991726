//! Shared Error Types
//!
//! This module defines error types raised by the wire-level types in
//! `shared`, before a request ever reaches a service.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Payload validation failures (field constraints)
//!
//! # Usage
//!
//! ```rust
//! use yoga_app::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "must not be blank");
//! ```
use thiserror::Error;

/// Errors raised while decoding or validating request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Check that a string field is not blank and at most `max` characters long
pub(crate) fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), SharedError> {
    let len = value.chars().count();
    if value.trim().is_empty() && min > 0 {
        return Err(SharedError::validation(field, "must not be blank"));
    }
    if len < min || len > max {
        return Err(SharedError::validation(
            field,
            format!("size must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
