//! Shared Module
//!
//! Types that sit on the wire between clients and the backend: booking DTOs,
//! payload validation errors and the application configuration.
//!
//! Nothing in here touches the database or the HTTP stack, so these types
//! can be reused by clients of the API.

/// Booking DTOs (sessions, teachers, users)
pub mod booking;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use booking::{SessionDto, TeacherDto, UserDto};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
