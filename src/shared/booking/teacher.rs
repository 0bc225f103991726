//! Teacher Data Structure

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A teacher as returned by `GET /api/teacher`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
