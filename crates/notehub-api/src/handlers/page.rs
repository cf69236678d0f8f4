//! The application page route.
//!
//! `/app`, `/app/` and `/app/{*segments}` recompose the whole view from the session
//! and the path on every navigation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use notehub_service::PageOutcome;

use crate::dto::response::PageResponse;
use crate::error::ApiResult;
use crate::extractors::MaybeIdentity;
use crate::state::AppState;

/// Prompt shown when the session is missing or has ended.
pub const SIGN_IN_MESSAGE: &str = "Session expired, please sign in";

/// GET /app
pub async fn app_root(
    State(state): State<AppState>,
    identity: MaybeIdentity,
) -> ApiResult<Response> {
    render(&state, identity, "").await
}

/// GET /app/{*segments}
pub async fn app_path(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Path(tail): Path<String>,
) -> ApiResult<Response> {
    render(&state, identity, &tail).await
}

async fn render(
    state: &AppState,
    MaybeIdentity(identity): MaybeIdentity,
    tail: &str,
) -> ApiResult<Response> {
    let outcome = state
        .page_composer
        .compose_tail(identity.as_ref(), tail, state.store.as_ref())
        .await?;

    let response = match outcome {
        PageOutcome::Ready(view) => {
            (StatusCode::OK, Json(PageResponse::Ready { view })).into_response()
        }
        PageOutcome::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            Json(PageResponse::Unauthenticated {
                message: SIGN_IN_MESSAGE.to_string(),
                sign_in: state.config.auth.sign_in_path.clone(),
            }),
        )
            .into_response(),
    };
    Ok(response)
}
