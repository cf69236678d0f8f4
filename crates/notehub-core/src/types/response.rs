//! Response types shared by every transport.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Structured error body returned for every failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error kind, e.g. `"NotFound"`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Whether the caller may retry the request.
    pub retryable: bool,
}

impl From<&AppError> for ApiErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.kind.code().to_string(),
            message: err.message.clone(),
            retryable: err.is_retryable(),
        }
    }
}
