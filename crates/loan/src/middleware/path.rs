use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError};

/// `Path` extractor whose rejections use the JSON error body.
pub struct SimplePath<T>(pub T);

impl<T, S> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::Rejected {
                status: rejection.status().as_u16(),
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
