//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Public and gated API routes
//! ```
//!
//! Only `/api/auth/*` is reachable without a bearer token. Everything else
//! under `/api` answers 401 with the entry-point body when the token is
//! missing, invalid, expired or names an unknown user.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
