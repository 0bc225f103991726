/**
 * Session Handlers
 *
 * HTTP handlers for `/api/session`. All of them sit behind the
 * authentication gate. Path ids arrive as strings so a non-numeric id is a
 * 400 with the standard error body rather than a framework rejection.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::{parse_id, BackendError};
use crate::backend::middleware::ApiJson;
use crate::backend::sessions::service::SessionService;
use crate::shared::SessionDto;

/// GET /api/session/{id}
pub async fn find_by_id(
    State(sessions): State<SessionService>,
    Path(id): Path<String>,
) -> Result<Json<SessionDto>, BackendError> {
    let id = parse_id(&id)?;
    let session = sessions
        .get_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("Session {} not found", id)))?;
    Ok(Json(SessionDto::from(&session)))
}

/// GET /api/session
pub async fn find_all(
    State(sessions): State<SessionService>,
) -> Result<Json<Vec<SessionDto>>, BackendError> {
    let all = sessions.find_all().await?;
    Ok(Json(all.iter().map(SessionDto::from).collect()))
}

/// POST /api/session
pub async fn create(
    State(sessions): State<SessionService>,
    ApiJson(dto): ApiJson<SessionDto>,
) -> Result<Json<SessionDto>, BackendError> {
    tracing::info!("Create session request: {}", dto.name);
    let session = sessions.create(&dto).await?;
    Ok(Json(SessionDto::from(&session)))
}

/// PUT /api/session/{id}
pub async fn update(
    State(sessions): State<SessionService>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<SessionDto>,
) -> Result<Json<SessionDto>, BackendError> {
    let id = parse_id(&id)?;
    let session = sessions.update(id, &dto).await?;
    Ok(Json(SessionDto::from(&session)))
}

/// DELETE /api/session/{id}
///
/// 404 when the session does not exist.
pub async fn delete(
    State(sessions): State<SessionService>,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let id = parse_id(&id)?;
    if sessions.get_by_id(id).await?.is_none() {
        return Err(BackendError::not_found(format!("Session {} not found", id)));
    }
    sessions.delete(id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/session/{id}/participate/{userId}
pub async fn participate(
    State(sessions): State<SessionService>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let (id, user_id) = (parse_id(&id)?, parse_id(&user_id)?);
    sessions.participate(id, user_id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/session/{id}/participate/{userId}
pub async fn no_longer_participate(
    State(sessions): State<SessionService>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let (id, user_id) = (parse_id(&id)?, parse_id(&user_id)?);
    sessions.no_longer_participate(id, user_id).await?;
    Ok(StatusCode::OK)
}
