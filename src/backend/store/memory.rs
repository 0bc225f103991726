/**
 * In-Memory Store
 *
 * A complete `Store` kept in process memory. The server falls back to it
 * when no `DATABASE_URL` is configured, and the test suites run against it.
 *
 * All state sits behind one `tokio::sync::RwLock`, so every trait method is
 * atomic with respect to the others. In particular `create_user` checks the
 * email and `add_participant` checks membership under the same write guard
 * that performs the insert.
 */

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::models::{NewUser, Session, SessionDraft, Teacher, User};
use super::{CredentialLookup, Participation, SessionStore, StoreError, TeacherStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    teachers: BTreeMap<i64, Teacher>,
    sessions: BTreeMap<i64, Session>,
    next_user_id: i64,
    next_teacher_id: i64,
    next_session_id: i64,
}

impl Tables {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

/// Store backed by ordered maps in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    session_writes: AtomicUsize,
    user_deletes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed writes to session rows or their participants
    pub fn session_writes(&self) -> usize {
        self.session_writes.load(Ordering::SeqCst)
    }

    /// Number of user deletions performed
    pub fn user_deletes(&self) -> usize {
        self.user_deletes.load(Ordering::SeqCst)
    }

    fn record_session_write(&self) {
        self.session_writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CredentialLookup for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|u| u.email == email))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        let now = Utc::now().naive_utc();
        let id = Tables::next_id(&mut tables.next_user_id);
        let user = User {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password: user.password,
            admin: user.admin,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id);
        for session in tables.sessions.values_mut() {
            session.users.retain(|&u| u != id);
        }
        self.user_deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl TeacherStore for MemoryStore {
    async fn find_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        Ok(self.tables.read().await.teachers.get(&id).cloned())
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        Ok(self.tables.read().await.teachers.values().cloned().collect())
    }

    async fn create_teacher(&self, first_name: &str, last_name: &str) -> Result<Teacher, StoreError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now().naive_utc();
        let id = Tables::next_id(&mut tables.next_teacher_id);
        let teacher = Teacher {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.teachers.insert(id, teacher.clone());
        Ok(teacher)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find_session_by_id(&self, id: i64) -> Result<Option<Session>, StoreError> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError> {
        Ok(self.tables.read().await.sessions.values().cloned().collect())
    }

    async fn insert_session(&self, draft: SessionDraft) -> Result<Session, StoreError> {
        let mut tables = self.tables.write().await;
        let id = Tables::next_id(&mut tables.next_session_id);
        let now = Utc::now().naive_utc();
        let session = Session {
            id,
            name: draft.name,
            date: draft.date,
            description: draft.description,
            teacher_id: draft.teacher_id,
            users: dedup(draft.users),
            created_at: now,
            updated_at: now,
        };
        tables.sessions.insert(id, session.clone());
        self.record_session_write();
        Ok(session)
    }

    async fn upsert_session(&self, id: i64, draft: SessionDraft) -> Result<Session, StoreError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now().naive_utc();
        let created_at = tables.sessions.get(&id).map_or(now, |s| s.created_at);
        let session = Session {
            id,
            name: draft.name,
            date: draft.date,
            description: draft.description,
            teacher_id: draft.teacher_id,
            users: dedup(draft.users),
            created_at,
            updated_at: now,
        };
        tables.sessions.insert(id, session.clone());
        tables.next_session_id = tables.next_session_id.max(id);
        self.record_session_write();
        Ok(session)
    }

    async fn delete_session(&self, id: i64) -> Result<(), StoreError> {
        self.tables.write().await.sessions.remove(&id);
        self.record_session_write();
        Ok(())
    }

    async fn add_participant(
        &self,
        session_id: i64,
        user_id: i64,
    ) -> Result<Participation, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Ok(Participation::UserMissing);
        }
        let Some(session) = tables.sessions.get_mut(&session_id) else {
            return Ok(Participation::SessionMissing);
        };
        if session.has_participant(user_id) {
            return Ok(Participation::AlreadyParticipating);
        }
        session.users.push(user_id);
        session.updated_at = Utc::now().naive_utc();
        self.record_session_write();
        Ok(Participation::Added)
    }

    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if let Some(session) = tables.sessions.get_mut(&session_id) {
            session.users.retain(|&u| u != user_id);
            session.updated_at = Utc::now().naive_utc();
        }
        self.record_session_write();
        Ok(())
    }
}

/// Drop repeated ids, keeping the first occurrence
fn dedup(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
