//! Integration tests driving the HTTP API end to end, plus the PostgreSQL
//! store when a test database is available

pub mod api;
pub mod database;
