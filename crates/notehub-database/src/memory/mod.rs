//! Process-local hierarchy store.

pub mod store;

pub use store::{MemoryHierarchyStore, StoreStats};
