//! PostgreSQL store tests (skipped without `TEST_DATABASE_URL`)
