//! Backend Module
//!
//! All server-side code: an Axum REST API for booking yoga sessions.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT issuance and validation
//! - **`middleware`** - Authentication gate and the `AuthUser` extractor
//! - **`sessions`** - Session CRUD and participation rules
//! - **`teachers`** - Teacher lookup
//! - **`users`** - Account lookup and deletion
//! - **`store`** - Persistence traits, PostgreSQL and in-memory stores
//! - **`error`** - Backend error types and their HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── sessions/       - Sessions and participation
//! ├── teachers/       - Teachers
//! ├── users/          - User accounts
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → authentication gate (validates token, attaches principal)
//! → handler → service → store → DTO → HTTP response.
//!
//! # Error Handling
//!
//! Services and handlers return `BackendError`, which is turned into a
//! status code and JSON body in one place (`error::conversion`).

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and tokens
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Sessions and participation
pub mod sessions;

/// Teacher lookup
pub mod teachers;

/// User accounts
pub mod users;

/// Persistence
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
pub use sessions::SessionService;
