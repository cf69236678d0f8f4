//! HTTP handlers.

pub mod document;
pub mod fallback;
pub mod folder;
pub mod health;
pub mod page;
