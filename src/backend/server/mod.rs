//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store selection (PostgreSQL or in-memory)
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Store**: PostgreSQL when `DATABASE_URL` is set, otherwise in-memory
//! 2. **State**: Session service and token service over the store
//! 3. **Router**: Public auth routes, gated API routes, tracing layer
//!
//! # Example
//!
//! ```rust,no_run
//! use yoga_app::backend::server::create_app;
//! use yoga_app::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
