//! # notehub-entity
//!
//! Domain entity models for NoteHub. Every struct in this crate represents
//! a database table row or a domain value object. Row types additionally
//! derive `sqlx::FromRow`.
//!
//! The hierarchy is strictly two levels deep: a user owns folders, a folder
//! holds documents. Documents carry no owner of their own.

pub mod document;
pub mod folder;
pub mod user;
