//! # notehub-core
//!
//! Core crate for NoteHub. Contains configuration schemas, typed
//! identifiers, shared response bodies, and the unified error system.
//!
//! This crate has **no** internal dependencies on other NoteHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
