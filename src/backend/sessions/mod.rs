//! Sessions Module
//!
//! Yoga sessions: CRUD and participation.
//!
//! - **`service`** - `SessionService`, the join/leave rules
//! - **`handlers`** - HTTP handlers for `/api/session`

pub mod handlers;
pub mod service;

pub use service::SessionService;
