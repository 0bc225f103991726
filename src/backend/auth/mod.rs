//! Authentication Module
//!
//! Registration, login and the bearer tokens that prove a request comes
//! from a logged-in user.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── tokens.rs       - JWT issuance and validation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS512 JWTs whose subject is the user's email
//! - Tokens are stateless; only the signing secret is held server-side
//!
//! Checking tokens on incoming requests is the job of
//! [`crate::backend::middleware::auth`].

/// JWT token generation and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
pub use handlers::{login, register};
pub use tokens::{Claims, JwtTokens, TokenError, TokenIssuer, TokenValidator};
