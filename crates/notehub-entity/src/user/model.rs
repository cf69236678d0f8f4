//! Authenticated identity model.

use serde::{Deserialize, Serialize};

use notehub_core::types::UserId;

/// The user a request acts for.
///
/// Users are created and maintained by the authentication provider; this
/// service only ever sees the identity carried by a verified session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user identifier.
    pub user_id: UserId,
    /// Email address, when the provider shares it.
    pub email: Option<String>,
    /// Display name, when the provider shares it.
    pub name: Option<String>,
}

impl Identity {
    /// Create an identity with no profile attributes.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            name: None,
        }
    }
}
