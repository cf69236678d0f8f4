//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::types::ApiErrorResponse;

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized | ErrorKind::InvalidSession => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal | ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Newtype so the orphan rule lets us implement `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status.is_server_error() {
            match err.kind {
                ErrorKind::StoreUnavailable => {
                    tracing::warn!(error = %err.message, "Store unavailable")
                }
                _ => tracing::error!(error = %err.message, kind = %err.kind, "Internal server error"),
            }
        }

        (status, Json(ApiErrorResponse::from(&err))).into_response()
    }
}

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;
