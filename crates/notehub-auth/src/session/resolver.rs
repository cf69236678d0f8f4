//! Turns request credentials into an optional authenticated identity.

use tracing::debug;

use notehub_core::error::{AppError, ErrorKind};
use notehub_entity::user::Identity;

use crate::jwt::decoder::JwtDecoder;

/// Credential material found on an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Nothing that looks like a session.
    Absent,
    /// A token from an `Authorization: Bearer` header.
    Bearer(String),
    /// A token from the session cookie.
    Cookie(String),
}

impl Credentials {
    /// Pick the credential to verify: a bearer header wins over the cookie.
    pub fn from_parts(bearer: Option<&str>, cookie: Option<&str>) -> Self {
        let non_empty = |s: &&str| !s.trim().is_empty();
        match (bearer.filter(non_empty), cookie.filter(non_empty)) {
            (Some(token), _) => Self::Bearer(token.trim().to_string()),
            (None, Some(token)) => Self::Cookie(token.trim().to_string()),
            (None, None) => Self::Absent,
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Bearer(token) | Self::Cookie(token) => Some(token),
        }
    }
}

/// Verifies session tokens. Pure and safe to call once per request.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    decoder: JwtDecoder,
}

impl SessionResolver {
    /// Creates a resolver around a decoder.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }

    /// Resolve credentials to an identity.
    ///
    /// * no credentials → `Ok(None)`
    /// * expired session → `Ok(None)`
    /// * tampered or malformed token → `InvalidSession`
    pub fn resolve(&self, credentials: &Credentials) -> Result<Option<Identity>, AppError> {
        let Some(token) = credentials.token() else {
            return Ok(None);
        };

        match self.decoder.decode(token) {
            Ok(claims) => Ok(Some(claims.identity())),
            Err(e) if e.kind == ErrorKind::Unauthorized => {
                debug!(reason = %e.message, "Session ended");
                Ok(None)
            }
            Err(e) => {
                debug!(error = %e, "Rejected session token");
                Err(e)
            }
        }
    }
}
