//! # notehub-auth
//!
//! Authentication and authorization for NoteHub.
//!
//! ## Modules
//!
//! - `jwt`: session token claims, verification, and local issuance
//! - `session`: turns request credentials into an optional identity
//! - `gate`: ownership checks for folders and (transitively) documents

pub mod gate;
pub mod jwt;
pub mod session;

pub use gate::{AuthorizationGate, Decision, DenyReason, ResourceKind, Resolved};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use session::{Credentials, SessionResolver};
