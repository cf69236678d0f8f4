//! Session token issuance.
//!
//! Production sessions come from the authentication provider. The encoder
//! signs tokens the same way so local tooling and tests can mint them.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use notehub_core::config::AuthConfig;
use notehub_core::error::AppError;
use notehub_entity::user::Identity;

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(config.session_ttl_minutes as i64),
        }
    }

    /// Issues a session token for `identity` with the configured lifetime.
    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue_with_ttl(identity, self.ttl)
    }

    /// Issues a session token with an explicit lifetime.
    ///
    /// A negative lifetime yields an already-expired token.
    pub fn issue_with_ttl(&self, identity: &Identity, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.user_id,
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
