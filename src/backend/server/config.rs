/**
 * Server Configuration
 *
 * Chooses and prepares the store the server runs on.
 *
 * # Store Selection
 *
 * - `database_url` set: PostgreSQL, with migrations applied on connect
 * - `database_url` unset: in-memory store seeded with the default teachers
 *
 * A configured database that cannot be reached is fatal; the server does
 * not silently fall back to memory.
 */

use std::sync::Arc;

use crate::backend::store::{MemoryStore, PgStore, Store, StoreError, TeacherStore};
use crate::shared::AppConfig;

/// Teachers every fresh store starts with (kept in sync with the initial migration)
pub const SEED_TEACHERS: [(&str, &str); 2] = [("Margot", "DELAHAYE"), ("Hélène", "THIERCELIN")];

/// Build the store described by `config`
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn Store>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory store; data is lost on restart");
            Ok(Arc::new(seeded_memory_store().await?))
        }
    }
}

/// In-memory store holding the seed teachers
pub async fn seeded_memory_store() -> Result<MemoryStore, StoreError> {
    let store = MemoryStore::new();
    for (first_name, last_name) in SEED_TEACHERS {
        store.create_teacher(first_name, last_name).await?;
    }
    Ok(store)
}
