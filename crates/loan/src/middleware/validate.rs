use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, validation_error_details};
use validator::Validate;

/// JSON body extractor that reports malformed bodies and field rule violations
/// as validation errors instead of axum's plain-text rejections. Rejections that
/// are not about the body content (size, content type) keep their own status.
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_error)?;

        value
            .validate()
            .map_err(|errors| ServiceError::Validation(validation_error_details(&errors)))?;

        Ok(Self(value))
    }
}

fn json_rejection_error(rejection: JsonRejection) -> ServiceError {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            ServiceError::Validation(vec![rejection.body_text()])
        }
        other => ServiceError::Rejected {
            status: other.status().as_u16(),
            message: other.body_text(),
        },
    }
}
