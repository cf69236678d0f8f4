//! Responses for requests no route accepts.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use notehub_core::error::AppError;

use crate::error::ApiError;

/// Unknown path.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError(AppError::not_found(format!("No route for {}", uri.path())))
}

/// Known path, unsupported method.
///
/// Keeps the `405` status but carries the usual error body.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    let mut response = ApiError(AppError::validation(format!(
        "Method {method} is not allowed on {}",
        uri.path()
    )))
    .into_response();
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
}
