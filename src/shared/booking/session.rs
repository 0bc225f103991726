//! Session Data Structure
//!
//! Represents a yoga session on the wire: what it is, when, who teaches it
//! and which users participate.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{check_length, SharedError};

/// Maximum length of a session name
pub const NAME_MAX_LEN: usize = 50;

/// Maximum length of a session description
pub const DESCRIPTION_MAX_LEN: usize = 2500;

/// A session as sent to and received from clients
///
/// Every field is optional at the serde level so that incomplete payloads
/// reach [`SessionDto::validate`] and are rejected with a 400 that names the
/// offending field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionDto {
    pub id: Option<i64>,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "teacher_id")]
    pub teacher_id: Option<i64>,
    pub description: Option<String>,
    /// Ids of participating users, in joining order
    pub users: Vec<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl SessionDto {
    /// Check the field constraints required to create or update a session
    pub fn validate(&self) -> Result<(), SharedError> {
        check_length("name", &self.name, 1, NAME_MAX_LEN)?;
        if self.date.is_none() {
            return Err(SharedError::validation("date", "must not be null"));
        }
        if self.teacher_id.is_none() {
            return Err(SharedError::validation("teacher_id", "must not be null"));
        }
        match &self.description {
            None => return Err(SharedError::validation("description", "must not be null")),
            Some(description) => check_length("description", description, 0, DESCRIPTION_MAX_LEN)?,
        }
        Ok(())
    }
}
