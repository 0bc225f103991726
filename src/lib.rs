//! Yoga App - Main Library
//!
//! Backend for booking yoga sessions: users register and log in, receive a
//! bearer token, browse sessions and teachers, and join or leave sessions.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and configuration
//!   - Session, teacher and user DTOs with their validation rules
//!   - `AppConfig` and its loader
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routes
//!   - JWT authentication gate
//!   - Session participation rules
//!   - PostgreSQL (sqlx) and in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use yoga_app::backend::server::create_app;
//! use yoga_app::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::BackendError` for everything a request can fail with, mapped
//!   to HTTP in one place

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
