//! Ownership-based authorization.

pub mod decision;
pub mod checker;

pub use decision::{Decision, DenyReason, ResourceKind, Resolved};
pub use checker::AuthorizationGate;
