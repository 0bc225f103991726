/**
 * User Handlers
 *
 * - `GET /api/user/{id}` - Account details, never the password hash
 * - `DELETE /api/user/{id}` - Delete one's own account
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::{parse_id, BackendError};
use crate::backend::middleware::AuthUser;
use crate::backend::store::{Store, UserStore};
use crate::backend::users::service::delete_account;
use crate::shared::UserDto;

/// GET /api/user/{id}
pub async fn find_by_id(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, BackendError> {
    let id = parse_id(&id)?;
    let user = store
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("User {} not found", id)))?;
    Ok(Json(UserDto::from(&user)))
}

/// DELETE /api/user/{id}
///
/// # Errors
///
/// * `400 Bad Request` - id is not numeric
/// * `404 Not Found` - no such account
/// * `401 Unauthorized` - the account belongs to someone else
pub async fn delete(
    State(store): State<Arc<dyn Store>>,
    AuthUser(principal): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&id)?;
    delete_account(store.as_ref(), &principal, id).await?;
    Ok(StatusCode::OK)
}
