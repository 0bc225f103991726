//! API integration tests, one file per resource

pub mod auth_test;
pub mod session_test;
pub mod user_test;
