//! Session verification configuration.

use serde::{Deserialize, Serialize};

/// Settings shared with the external authentication provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret the provider signs session tokens with.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Clock-skew leeway applied to `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Cookie carrying the session token when no bearer header is sent.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Where unauthenticated page requests are sent to sign in.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Lifetime of locally issued session tokens, in minutes.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            leeway_seconds: default_leeway(),
            cookie_name: default_cookie_name(),
            sign_in_path: default_sign_in_path(),
            session_ttl_minutes: default_session_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_cookie_name() -> String {
    "notehub.session-token".to_string()
}

fn default_sign_in_path() -> String {
    "/signin".to_string()
}

fn default_session_ttl() -> u64 {
    60 * 24 * 30
}
