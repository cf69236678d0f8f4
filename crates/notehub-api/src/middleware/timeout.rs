//! Per-request deadline.
//!
//! A handler that outlives `request_timeout_seconds` is dropped, which
//! releases any store handle it held, and the caller gets a retryable
//! `StoreUnavailable` body instead of a bare status.

use std::time::Duration;

use axum::BoxError;
use tower::timeout::error::Elapsed;

use notehub_core::config::ServerConfig;
use notehub_core::error::AppError;

use crate::error::ApiError;

/// Deadline for a single request.
pub fn request_timeout(config: &ServerConfig) -> Duration {
    Duration::from_secs(config.request_timeout_seconds)
}

/// Turns errors raised by the timeout layer into API errors.
pub async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request exceeded its deadline");
        ApiError(AppError::store_unavailable("Request timed out, please retry"))
    } else {
        ApiError(AppError::internal(format!("Unhandled middleware error: {err}")))
    }
}
