//! # notehub-database
//!
//! The hierarchy store: the persistence-facing contract for folders and
//! documents, a PostgreSQL implementation backed by a sqlx pool, and a
//! process-local implementation for development and tests.
//!
//! No authorization happens here. Callers gate every id that came from
//! client input before handing it to a store handle.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::{DatabasePool, open_store};
pub use memory::MemoryHierarchyStore;
pub use repositories::PgHierarchyStore;
pub use store::{HierarchyStore, StoreHandle, StoreLease};
