//! # notehub-service
//!
//! Application use cases for NoteHub. Services work on a store handle the
//! caller has already acquired, and on resources the authorization gate
//! has already resolved.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time.

pub mod context;
pub mod document;
pub mod folder;
pub mod optimistic;
pub mod page;

pub use context::RequestContext;
pub use document::DocumentService;
pub use folder::FolderService;
pub use optimistic::{ClientError, FolderEntry, OptimisticFolders, PendingFolder};
pub use page::{PageComposer, PageOutcome, PagePath, ViewModel};
