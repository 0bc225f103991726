//! Authentication Handlers Module
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, names and password → user created (never admin) → message returned
//! 2. **Login**: email and password → credentials verified → JWT token returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 (no information leakage)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
