//! Database test fixtures
//!
//! PostgreSQL tests only run when `TEST_DATABASE_URL` points at a scratch
//! database. Rows are never truncated; each test works on freshly created
//! users and sessions so tests can share one database.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use yoga_app::backend::store::PgStore;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Connect to the test database and run migrations
///
/// Returns `None` when `TEST_DATABASE_URL` is unset.
pub async fn connect_test_store() -> Option<PgStore> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    Some(
        PgStore::connect(&database_url)
            .await
            .expect("Failed to connect to test database"),
    )
}

/// An email no other test run has used
pub fn unique_email(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}{}_{}@pg.test", prefix, nanos % 1_000_000_000, n)
}
