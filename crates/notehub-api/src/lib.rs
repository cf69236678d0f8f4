//! # notehub-api
//!
//! HTTP API layer for NoteHub built on Axum.
//!
//! Provides the REST endpoints, the application page route, the per-call
//! pipeline (validation, session, store handle, authorization), tower
//! middleware, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
