/**
 * JSON Body Extractor
 *
 * `ApiJson<T>` behaves like `axum::Json<T>`, except that a body axum cannot
 * decode (malformed JSON, a field of the wrong type, an explicit `null`, a
 * missing content type) becomes a `BackendError` carrying
 * `SharedError::SerializationError`. Clients then get a 400 with the
 * standard error body instead of axum's plain-text 415/422.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// JSON request body with the backend's rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(SharedError::serialization(rejection.body_text()).into())
            }
        }
    }
}
