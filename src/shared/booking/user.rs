//! User Data Structure

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Public view of a user account
///
/// There is deliberately no password field: hashes never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
