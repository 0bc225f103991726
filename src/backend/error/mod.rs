//! Backend Error Module
//!
//! Error types raised by services and handlers, and their conversion to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and id parsing
//! └── conversion.rs - IntoResponse and the JSON error body
//! ```
//!
//! # Error Kinds
//!
//! | Variant | Status |
//! |---|---|
//! | `NotFound` | 404 |
//! | `BadRequest`, `SharedError` | 400 |
//! | `Unauthorized` | 401 |
//! | `Store`, `Token`, `PasswordHash` | 500 |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::{parse_id, BackendError};
