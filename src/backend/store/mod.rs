//! Store Module
//!
//! Persistence for users, teachers and sessions behind a set of capability
//! traits, so services and the authentication gate never name a concrete
//! backend.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Capability traits and StoreError
//! ├── models.rs   - Row types and DTO conversions
//! ├── postgres.rs - PostgreSQL implementation (sqlx)
//! └── memory.rs   - In-memory implementation
//! ```
//!
//! # Capabilities
//!
//! - **`CredentialLookup`** - Resolve a login identifier to a user
//! - **`UserStore`** - User accounts
//! - **`TeacherStore`** - Teachers (read mostly)
//! - **`SessionStore`** - Sessions and their participants
//! - **`Store`** - All of the above; what `AppState` holds
//!
//! # Participants
//!
//! Joining and leaving a session are single atomic store operations
//! (`add_participant` / `remove_participant`) rather than load, mutate and
//! save. Two concurrent joins of the same user cannot both succeed.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryStore;
pub use models::{NewUser, Session, SessionDraft, Teacher, User};
pub use postgres::PgStore;

/// Errors raised by a store backend
///
/// Apart from `DuplicateEmail`, these are never recovered locally; they
/// surface as 500 responses.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another account already uses this email
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Outcome of [`SessionStore::add_participant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    Added,
    AlreadyParticipating,
    SessionMissing,
    UserMissing,
}

/// Lookup of users by login identifier
///
/// This is the only capability the authentication gate needs.
#[async_trait]
pub trait CredentialLookup: Send + Sync {
    /// Find the user whose email is `email`
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// User account persistence
#[async_trait]
pub trait UserStore: CredentialLookup {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Insert a user, assigning id and timestamps
    ///
    /// Fails with `StoreError::DuplicateEmail`, writing nothing, if the email
    /// is taken. The check and the insert are one operation.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Delete a user and every participation that references it
    async fn delete_user(&self, id: i64) -> Result<(), StoreError>;
}

/// Teacher persistence
#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn find_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>, StoreError>;

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError>;

    async fn create_teacher(&self, first_name: &str, last_name: &str) -> Result<Teacher, StoreError>;
}

/// Session persistence
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_session_by_id(&self, id: i64) -> Result<Option<Session>, StoreError>;

    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError>;

    /// Insert a new session, assigning id and timestamps
    async fn insert_session(&self, draft: SessionDraft) -> Result<Session, StoreError>;

    /// Write `draft` under `id`, inserting when no such session exists
    async fn upsert_session(&self, id: i64, draft: SessionDraft) -> Result<Session, StoreError>;

    async fn delete_session(&self, id: i64) -> Result<(), StoreError>;

    /// Append `user_id` to the participants of `session_id`
    ///
    /// Writes only when the outcome is [`Participation::Added`].
    async fn add_participant(
        &self,
        session_id: i64,
        user_id: i64,
    ) -> Result<Participation, StoreError>;

    /// Remove `user_id` from the participants of `session_id`
    ///
    /// Removing a user that does not participate is not an error.
    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<(), StoreError>;
}

/// Every store capability at once
pub trait Store: UserStore + TeacherStore + SessionStore {}

impl<T> Store for T where T: UserStore + TeacherStore + SessionStore {}
