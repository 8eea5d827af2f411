// task-tracker/src/extractors/json.rs

use crate::error::AppError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

/// JSONボディExtractor
///
/// axum標準の `Json` と同じだが、不正なボディを `AppError::ValidationError` として返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

impl<T> IntoResponse for AppJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::ValidationError(err.body_text()),
        JsonRejection::JsonSyntaxError(_) => {
            AppError::ValidationError("Malformed JSON body".to_string())
        }
        JsonRejection::MissingJsonContentType(_) => AppError::ValidationError(
            "Expected request with `Content-Type: application/json`".to_string(),
        ),
        other => AppError::ValidationError(other.body_text()),
    }
}
