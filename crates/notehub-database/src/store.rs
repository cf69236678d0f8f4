//! The hierarchy store contract.
//!
//! A [`HierarchyStore`] is the shared, pool-level object. Each request
//! checks out one [`StoreHandle`] for its whole lifetime; dropping the
//! handle returns the underlying connection, whichever way the request
//! ends.

use async_trait::async_trait;

use notehub_core::result::AppResult;
use notehub_core::types::{DocumentId, FolderId, UserId};
use notehub_entity::document::{Document, DocumentPatch, DocumentSummary, NewDocument};
use notehub_entity::folder::Folder;

/// A checked-out store handle, released on drop.
pub type StoreLease = Box<dyn StoreHandle>;

/// Pool-level entry point to folder and document persistence.
#[async_trait]
pub trait HierarchyStore: Send + Sync + std::fmt::Debug + 'static {
    /// Check out a handle for the duration of one request.
    ///
    /// Fails with `StoreUnavailable` when no connection can be obtained.
    async fn acquire(&self) -> AppResult<StoreLease>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Per-request access to folders and documents.
///
/// Every operation is atomic for the single record it touches.
#[async_trait]
pub trait StoreHandle: Send {
    /// All folders owned by `owner_id`, in a stable order.
    async fn list_folders_by_owner(&mut self, owner_id: UserId) -> AppResult<Vec<Folder>>;

    /// One folder, or `NotFound`.
    async fn get_folder(&mut self, folder_id: FolderId) -> AppResult<Folder>;

    /// Create a folder. Fails with `Validation` if `name` is blank.
    async fn create_folder(&mut self, owner_id: UserId, name: &str) -> AppResult<Folder>;

    /// Summaries of the documents in `folder_id`, in a stable order.
    async fn list_documents_by_folder(
        &mut self,
        folder_id: FolderId,
    ) -> AppResult<Vec<DocumentSummary>>;

    /// One document with its body, or `NotFound`.
    async fn get_document(&mut self, document_id: DocumentId) -> AppResult<Document>;

    /// Create a document inside `folder_id`.
    async fn create_document(
        &mut self,
        folder_id: FolderId,
        document: &NewDocument,
    ) -> AppResult<Document>;

    /// Merge `patch` into the stored document and bump `updated_at`.
    ///
    /// Fails with `NotFound` if the document does not exist.
    async fn update_document(
        &mut self,
        document_id: DocumentId,
        patch: &DocumentPatch,
    ) -> AppResult<Document>;
}
