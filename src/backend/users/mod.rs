//! Users Module
//!
//! Account lookup and deletion.
//!
//! - **`service`** - The account deletion rule
//! - **`handlers`** - HTTP handlers for `/api/user`

pub mod handlers;
pub mod service;

pub use service::delete_account;
