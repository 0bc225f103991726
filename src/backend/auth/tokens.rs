/**
 * Bearer Tokens (JWT)
 *
 * This module issues and validates the signed, time-limited tokens that
 * prove a request comes from a logged-in user. Tokens are never stored
 * server-side: the signing secret is the only state.
 *
 * Tokens are HS512 JWTs with the claims `{sub, iat, exp}`, where `sub` is
 * the user's email. Changing the secret invalidates every outstanding token.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's login email
    pub sub: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Produces tokens for authenticated subjects
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `subject`, valid from now for the configured lifetime
    fn issue(&self, subject: &str) -> Result<String, TokenError>;
}

/// Checks tokens presented by clients
pub trait TokenValidator: Send + Sync {
    /// True iff the token parses, its signature verifies and it has not expired
    ///
    /// Never fails: every problem with the token collapses to `false`.
    fn validate(&self, token: &str) -> bool;

    /// Verify the signature and return the embedded subject
    ///
    /// Expiry is not checked here; callers run [`TokenValidator::validate`] first.
    fn extract_subject(&self, token: &str) -> Result<String, TokenError>;
}

/// HS512 JWT implementation of [`TokenIssuer`] and [`TokenValidator`]
#[derive(Clone)]
pub struct JwtTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl JwtTokens {
    /// Create a token service from the signing secret and the lifetime in milliseconds
    pub fn new(secret: &str, lifetime_ms: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::milliseconds(i64::try_from(lifetime_ms).unwrap_or(i64::MAX)),
        }
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        // `exp` has whole-second resolution; round up so a token is never
        // born expired.
        let exp = expires_at.timestamp() + i64::from(expires_at.timestamp_subsec_nanos() > 0);

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp,
        };

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key).map_err(TokenError::Encode)
    }

    /// Decode and verify a token, optionally checking expiry
    pub fn decode(&self, token: &str, check_expiry: bool) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        validation.validate_exp = check_expiry;
        if !check_expiry {
            validation.required_spec_claims.clear();
        }

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

impl TokenIssuer for JwtTokens {
    fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }
}

impl TokenValidator for JwtTokens {
    fn validate(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            tracing::debug!("Rejected empty token");
            return false;
        }
        match self.decode(token, true) {
            Ok(claims) => claims.exp > Utc::now().timestamp(),
            Err(e) => {
                tracing::debug!("Rejected token: {}", e);
                false
            }
        }
    }

    fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token, false).map(|claims| claims.sub)
    }
}
