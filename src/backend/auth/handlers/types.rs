/**
 * Authentication Handler Types
 *
 * Request and response bodies of the register and login endpoints.
 * Field names are camelCase on the wire.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{check_length, SharedError};

/// Maximum length of a login email
pub const EMAIL_MAX_LEN: usize = 50;

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    /// User's email address (the login identifier)
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

impl LoginRequest {
    /// Both fields must be present
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.email.trim().is_empty() {
            return Err(SharedError::validation("email", "must not be blank"));
        }
        if self.password.trim().is_empty() {
            return Err(SharedError::validation("password", "must not be blank"));
        }
        Ok(())
    }
}

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupRequest {
    /// User's email address (unique, at most 50 chars)
    pub email: String,
    /// 3-20 chars
    pub first_name: String,
    /// 3-20 chars
    pub last_name: String,
    /// 6-40 chars, hashed before storage
    pub password: String,
}

impl SignupRequest {
    /// Validate field presence, lengths and the email shape
    pub fn validate(&self) -> Result<(), SharedError> {
        check_length("email", &self.email, 1, EMAIL_MAX_LEN)?;
        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "must be a well-formed email address"));
        }
        check_length("firstName", &self.first_name, 3, 20)?;
        check_length("lastName", &self.last_name, 3, 20)?;
        check_length("password", &self.password, 6, 40)?;
        Ok(())
    }
}

/// Login response
///
/// Carries the bearer token and enough of the account for the client to
/// render itself without another round trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    /// Always `"Bearer"`
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    /// The login email
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

/// Plain message body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
