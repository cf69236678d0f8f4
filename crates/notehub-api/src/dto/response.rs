//! Response DTOs.

use serde::{Deserialize, Serialize};

use notehub_service::ViewModel;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Creates a response whose payload describes a failure, such as a
    /// degraded health report.
    pub fn failed(data: T) -> Self {
        Self {
            success: false,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `available` or `unavailable`.
    pub store: String,
}

/// Body of the application page route.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageResponse {
    /// The page rendered.
    Ready {
        /// Composed view model.
        view: ViewModel,
    },
    /// No live session.
    Unauthenticated {
        /// Prompt for the user.
        message: String,
        /// Where to sign in.
        sign_in: String,
    },
}
