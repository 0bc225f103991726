/**
 * Session Service
 *
 * CRUD on sessions and the join/leave rules for their participants.
 *
 * # Participation Rules
 *
 * - Joining needs both the session and the user to exist (`NotFound`)
 * - Joining twice is rejected (`BadRequest`), never silently accepted
 * - Leaving needs the session to exist; leaving a session the user never
 *   joined succeeds and still writes
 *
 * The existence and duplicate checks that decide a join are made by the
 * store in the same operation as the append, so concurrent joins by one
 * user cannot both succeed, and a session deleted mid-join is `NotFound`.
 */

use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::store::{
    Participation, Session, SessionDraft, SessionStore, Store, TeacherStore, UserStore,
};
use crate::shared::{SessionDto, SharedError};

/// Session operations over a [`Store`]
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn Store>,
}

impl SessionService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Persist a new session and return it as stored
    pub async fn create(&self, dto: &SessionDto) -> Result<Session, BackendError> {
        let draft = self.draft(dto).await?;
        let session = self.store.insert_session(draft).await?;
        tracing::info!("Created session {} ({})", session.id, session.name);
        Ok(session)
    }

    /// Write `dto` under `id`
    ///
    /// No existence check: an unknown id is inserted.
    pub async fn update(&self, id: i64, dto: &SessionDto) -> Result<Session, BackendError> {
        let draft = self.draft(dto).await?;
        let session = self.store.upsert_session(id, draft).await?;
        tracing::info!("Updated session {}", id);
        Ok(session)
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.store.delete_session(id).await?;
        tracing::info!("Deleted session {}", id);
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Session>, BackendError> {
        Ok(self.store.find_session_by_id(id).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Session>, BackendError> {
        Ok(self.store.list_sessions().await?)
    }

    /// Add `user_id` to the participants of session `id`
    ///
    /// # Errors
    ///
    /// * `NotFound` - session or user does not exist (nothing is written)
    /// * `BadRequest` - the user already participates (nothing is written)
    pub async fn participate(&self, id: i64, user_id: i64) -> Result<(), BackendError> {
        match self.store.add_participant(id, user_id).await? {
            Participation::Added => {
                tracing::info!("User {} joined session {}", user_id, id);
                Ok(())
            }
            Participation::SessionMissing => {
                Err(BackendError::not_found(format!("Session {} not found", id)))
            }
            Participation::UserMissing => {
                Err(BackendError::not_found(format!("User {} not found", user_id)))
            }
            Participation::AlreadyParticipating => {
                tracing::warn!("User {} already participates in session {}", user_id, id);
                Err(BackendError::bad_request(format!(
                    "User {} already participates in session {}",
                    user_id, id
                )))
            }
        }
    }

    /// Remove `user_id` from the participants of session `id`
    ///
    /// # Errors
    ///
    /// * `NotFound` - session does not exist
    pub async fn no_longer_participate(&self, id: i64, user_id: i64) -> Result<(), BackendError> {
        if self.store.find_session_by_id(id).await?.is_none() {
            return Err(BackendError::not_found(format!("Session {} not found", id)));
        }

        self.store.remove_participant(id, user_id).await?;
        tracing::info!("User {} left session {}", user_id, id);
        Ok(())
    }

    /// Validate a payload and resolve its references
    ///
    /// An unknown teacher id becomes no teacher; unknown user ids are dropped.
    async fn draft(&self, dto: &SessionDto) -> Result<SessionDraft, BackendError> {
        dto.validate()?;

        let date = dto
            .date
            .ok_or_else(|| SharedError::validation("date", "must not be null"))?;
        let description = dto
            .description
            .clone()
            .ok_or_else(|| SharedError::validation("description", "must not be null"))?;

        let teacher_id = match dto.teacher_id {
            Some(teacher_id) => self
                .store
                .find_teacher_by_id(teacher_id)
                .await?
                .map(|teacher| teacher.id),
            None => None,
        };

        let mut users = Vec::with_capacity(dto.users.len());
        for &user_id in &dto.users {
            if users.contains(&user_id) {
                continue;
            }
            if self.store.find_user_by_id(user_id).await?.is_some() {
                users.push(user_id);
            }
        }

        Ok(SessionDraft {
            name: dto.name.clone(),
            date,
            description,
            teacher_id,
            users,
        })
    }
}
