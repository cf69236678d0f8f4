//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notehub_core::types::UserId;
use notehub_entity::user::Identity;

/// Context for the current authenticated request.
///
/// Built by the API layer once the session resolves and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated identity.
    pub identity: Identity,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            request_time: Utc::now(),
        }
    }

    /// Shorthand for the acting user's id.
    pub fn user_id(&self) -> UserId {
        self.identity.user_id
    }
}
