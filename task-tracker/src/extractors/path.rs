// task-tracker/src/extractors/path.rs

use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// パスパラメータ検証トレイト
pub trait PathParam: Sized {
    fn parse_from_str(s: &str) -> Result<Self, AppError>;
}

impl PathParam for i32 {
    fn parse_from_str(s: &str) -> Result<Self, AppError> {
        s.parse::<i32>()
            .map_err(|_| AppError::ValidationError(format!("Invalid id: '{}'", s)))
    }
}

/// 汎用パスパラメータExtractor
///
/// 数値でないIDは404ではなく400として扱う。
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: PathParam + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationError("Missing path parameter".to_string()))?;

        let parsed = T::parse_from_str(&value)?;
        Ok(ValidatedPath(parsed))
    }
}
