/**
 * PostgreSQL Store
 *
 * `Store` implementation over a sqlx `PgPool`. The schema lives in
 * `migrations/` and is applied by [`PgStore::connect`].
 *
 * Participants are rows of the `participate` table, unique per
 * (session, user). Joining is an `INSERT … ON CONFLICT DO NOTHING`, so the
 * duplicate check and the write are one statement and concurrent joins of
 * the same user cannot both land. The session and user rows are held with
 * `FOR KEY SHARE` for the rest of the transaction, so neither can be deleted
 * between the existence check and the insert.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgExecutor, PgPool};

use super::models::{NewUser, Session, SessionDraft, Teacher, User};
use super::{CredentialLookup, Participation, SessionStore, StoreError, TeacherStore, UserStore};

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, password, admin, created_at, updated_at";

const TEACHER_COLUMNS: &str = "id, first_name, last_name, created_at, updated_at";

const SESSION_SELECT: &str = r#"
    SELECT s.id, s.name, s.date, s.description, s.teacher_id, s.created_at, s.updated_at,
           COALESCE(
               ARRAY_AGG(p.user_id ORDER BY p.id) FILTER (WHERE p.user_id IS NOT NULL),
               '{}'
           ) AS users
    FROM sessions s
    LEFT JOIN participate p ON p.session_id = s.id
"#;

/// Store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn fetch_session<'e, E>(executor: E, id: i64) -> Result<Option<Session>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("{SESSION_SELECT} WHERE s.id = $1 GROUP BY s.id");
    sqlx::query_as::<_, Session>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await
}

async fn replace_participants(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    session_id: i64,
    users: &[i64],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM participate WHERE session_id = $1")
        .bind(session_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO participate (session_id, user_id)
        SELECT $1, u FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(u, ord)
        ORDER BY ord
        ON CONFLICT (session_id, user_id) DO NOTHING
        "#,
    )
    .bind(session_id)
    .bind(users)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[async_trait]
impl CredentialLookup for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now().naive_utc();
        let query = format!(
            r#"
            INSERT INTO users (email, first_name, last_name, password, admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {USER_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.password)
            .bind(user.admin)
            .bind(now)
            .fetch_one(&self.pool)
            .await;

        match created {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateEmail(user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TeacherStore for PgStore {
    async fn find_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        let query = format!("SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1");
        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(teacher)
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        let query = format!("SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY id");
        let teachers = sqlx::query_as::<_, Teacher>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(teachers)
    }

    async fn create_teacher(&self, first_name: &str, last_name: &str) -> Result<Teacher, StoreError> {
        let now = Utc::now().naive_utc();
        let query = format!(
            "INSERT INTO teachers (first_name, last_name, created_at, updated_at) \
             VALUES ($1, $2, $3, $3) RETURNING {TEACHER_COLUMNS}"
        );
        let teacher = sqlx::query_as::<_, Teacher>(&query)
            .bind(first_name)
            .bind(last_name)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(teacher)
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn find_session_by_id(&self, id: i64) -> Result<Option<Session>, StoreError> {
        Ok(fetch_session(&self.pool, id).await?)
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StoreError> {
        let query = format!("{SESSION_SELECT} GROUP BY s.id ORDER BY s.id");
        let sessions = sqlx::query_as::<_, Session>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(sessions)
    }

    async fn insert_session(&self, draft: SessionDraft) -> Result<Session, StoreError> {
        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sessions (name, date, description, teacher_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(draft.date)
        .bind(&draft.description)
        .bind(draft.teacher_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        replace_participants(&mut tx, id, &draft.users).await?;
        let session = fetch_session(&mut *tx, id).await?.ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(session)
    }

    async fn upsert_session(&self, id: i64, draft: SessionDraft) -> Result<Session, StoreError> {
        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO sessions (id, name, date, description, teacher_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                date = EXCLUDED.date,
                description = EXCLUDED.description,
                teacher_id = EXCLUDED.teacher_id,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.date)
        .bind(&draft.description)
        .bind(draft.teacher_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // An explicit id may be ahead of the serial; keep later inserts clear of it.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('sessions', 'id'), \
             GREATEST((SELECT MAX(id) FROM sessions), 1))",
        )
        .execute(&mut *tx)
        .await?;

        replace_participants(&mut tx, id, &draft.users).await?;
        let session = fetch_session(&mut *tx, id).await?.ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(session)
    }

    async fn delete_session(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn add_participant(
        &self,
        session_id: i64,
        user_id: i64,
    ) -> Result<Participation, StoreError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query("SELECT 1 FROM users WHERE id = $1 FOR KEY SHARE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if user.is_none() {
            return Ok(Participation::UserMissing);
        }

        let session = sqlx::query("SELECT 1 FROM sessions WHERE id = $1 FOR KEY SHARE")
            .bind(session_id)
            .fetch_optional(&mut *tx)
            .await?;
        if session.is_none() {
            return Ok(Participation::SessionMissing);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO participate (session_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (session_id, user_id) DO NOTHING
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            == 1;

        if !inserted {
            return Ok(Participation::AlreadyParticipating);
        }

        sqlx::query("UPDATE sessions SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now().naive_utc())
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Participation::Added)
    }

    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM participate WHERE session_id = $1 AND user_id = $2")
            .bind(session_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE sessions SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now().naive_utc())
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
