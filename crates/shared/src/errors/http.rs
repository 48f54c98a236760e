use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

const UNEXPECTED: &str = "An unexpected error occurred";

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn status_and_body(self) -> (StatusCode, ErrorResponse) {
        match self.0 {
            ServiceError::Validation(details) => {
                warn!("📝 Validation failed: {details:?}");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Validation Error", details),
                )
            }
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {msg}");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Resource Not Found", vec![msg]),
                )
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (
                        StatusCode::NOT_FOUND,
                        ErrorResponse::new("Resource Not Found", vec!["Not found".to_string()]),
                    )
                }
                RepositoryError::AlreadyExists(msg)
                | RepositoryError::ForeignKey(msg)
                | RepositoryError::Constraint(msg) => {
                    warn!("⚡ Data integrity violation: {msg}");
                    (
                        StatusCode::CONFLICT,
                        ErrorResponse::new("Data Integrity Violation", vec![msg]),
                    )
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new(
                            "Internal Server Error",
                            vec!["Database error".to_string()],
                        ),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {msg}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new("Internal Server Error", vec![UNEXPECTED.to_string()]),
                    )
                }
            },
            ServiceError::Rejected { status, message } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
                warn!("🚫 Request rejected with {status}: {message}");
                (
                    status,
                    ErrorResponse::new(
                        status.canonical_reason().unwrap_or("Request Rejected"),
                        vec![message],
                    ),
                )
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal Server Error", vec![UNEXPECTED.to_string()]),
                )
            }
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            error!("🚨 HTTP Error {}: {}", status, body.message);
        } else {
            warn!("⚠️ HTTP Warning {}: {}", status, body.message);
        }

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_details() {
        let err = AppErrorHttp::from(ServiceError::Validation(vec![
            "Payment date cannot be greater than the due date".to_string(),
        ]));

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Validation Error");
        assert_eq!(
            body.details,
            vec!["Payment date cannot be greater than the due date"]
        );
    }

    #[test]
    fn not_found_keeps_a_body() {
        let err = AppErrorHttp::from(ServiceError::NotFound(
            "Loan with Loan ID L-404 not found".to_string(),
        ));

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Resource Not Found");
        assert_eq!(body.details, vec!["Loan with Loan ID L-404 not found"]);
    }

    #[test]
    fn duplicate_key_maps_to_conflict_with_cause() {
        let err = AppErrorHttp::from(RepositoryError::AlreadyExists(
            "duplicate key value violates unique constraint \"loans_loan_id_key\"".to_string(),
        ));

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "Data Integrity Violation");
        assert!(body.details[0].contains("loans_loan_id_key"));
    }

    #[test]
    fn database_failures_do_not_leak_the_cause() {
        let err = AppErrorHttp::from(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.details, vec!["Database error"]);
    }

    #[test]
    fn rejected_requests_keep_their_status() {
        let err = AppErrorHttp::from(ServiceError::Rejected {
            status: 413,
            message: "Failed to buffer the request body: length limit exceeded".to_string(),
        });

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Payload Too Large");
        assert_eq!(
            body.details,
            vec!["Failed to buffer the request body: length limit exceeded"]
        );
    }

    #[test]
    fn out_of_range_rejection_status_falls_back_to_bad_request() {
        let err = AppErrorHttp::from(ServiceError::Rejected {
            status: 1000,
            message: "bad".to_string(),
        });

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Bad Request");
    }

    #[test]
    fn internal_errors_hide_their_message() {
        let err = AppErrorHttp::from(ServiceError::InternalServerError(
            "connection reset by peer".to_string(),
        ));

        let (status, body) = err.status_and_body();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        assert_eq!(body.details, vec![UNEXPECTED]);
    }
}
