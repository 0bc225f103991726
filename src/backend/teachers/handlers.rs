/**
 * Teacher Handlers
 *
 * - `GET /api/teacher` - All teachers
 * - `GET /api/teacher/{id}` - One teacher, 404 if absent
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::error::{parse_id, BackendError};
use crate::backend::store::{Store, TeacherStore};
use crate::shared::TeacherDto;

/// GET /api/teacher/{id}
pub async fn find_by_id(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
) -> Result<Json<TeacherDto>, BackendError> {
    let id = parse_id(&id)?;
    let teacher = store
        .find_teacher_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("Teacher {} not found", id)))?;
    Ok(Json(TeacherDto::from(&teacher)))
}

/// GET /api/teacher
pub async fn find_all(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<TeacherDto>>, BackendError> {
    let teachers = store.list_teachers().await?;
    Ok(Json(teachers.iter().map(TeacherDto::from).collect()))
}
