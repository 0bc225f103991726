//! Teachers Module
//!
//! Read-only HTTP access to teachers. Teachers are seeded with the schema;
//! there is no endpoint that creates or edits them.

pub mod handlers;

pub use handlers::{find_all, find_by_id};
