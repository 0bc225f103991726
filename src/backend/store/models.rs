/**
 * Persistence Models
 *
 * Rows as the store hands them out, plus the conversions to the wire-level
 * DTOs in `shared::booking`. The conversions are field-by-field; the only
 * thing they ever drop is the password hash.
 */

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::shared::booking::{SessionDto, TeacherDto, UserDto};

/// User account row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Server-assigned id
    pub id: i64,
    /// Login identifier (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt hash
    pub password: String,
    /// Grants access to session administration in the client
    pub admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields needed to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
}

/// Teacher row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Session row with its participants
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: Option<i64>,
    /// Participating user ids in joining order, never containing duplicates
    pub users: Vec<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Session {
    /// Whether `user_id` already participates
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Session content as written by create and update
///
/// Teacher and participant references have already been resolved against
/// the store, so every id in here exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: Option<i64>,
    pub users: Vec<i64>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            last_name: user.last_name.clone(),
            first_name: user.first_name.clone(),
            admin: user.admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&Teacher> for TeacherDto {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            last_name: teacher.last_name.clone(),
            first_name: teacher.first_name.clone(),
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            id: Some(session.id),
            name: session.name.clone(),
            date: Some(session.date),
            teacher_id: session.teacher_id,
            description: Some(session.description.clone()),
            users: session.users.clone(),
            created_at: Some(session.created_at),
            updated_at: Some(session.updated_at),
        }
    }
}
