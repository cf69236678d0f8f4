//! Session credentials from request headers.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use notehub_auth::session::Credentials;
use notehub_entity::user::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Read a bearer token or, failing that, the session cookie.
pub fn credentials_from_headers(headers: &HeaderMap, cookie_name: &str) -> Credentials {
    let bearer = headers.typed_get::<Authorization<Bearer>>();
    let jar = CookieJar::from_headers(headers);

    Credentials::from_parts(
        bearer.as_ref().map(|auth| auth.token()),
        jar.get(cookie_name).map(|cookie| cookie.value()),
    )
}

/// The signed-in identity, if the request carries a live session.
///
/// Rejects only tampered tokens; absent and expired sessions yield `None`.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for MaybeIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = credentials_from_headers(&parts.headers, &state.config.auth.cookie_name);
        Ok(Self(state.sessions.resolve(&credentials)?))
    }
}
