//! PostgreSQL implementation of the hierarchy store.

pub mod document;
pub mod folder;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use notehub_core::result::AppResult;
use notehub_core::types::{DocumentId, FolderId, UserId};
use notehub_entity::document::{Document, DocumentPatch, DocumentSummary, NewDocument};
use notehub_entity::folder::{Folder, NewFolder};

use crate::error::map_sqlx_error;
use crate::store::{HierarchyStore, StoreHandle, StoreLease};

pub use document::DocumentRepository;
pub use folder::FolderRepository;

/// Hierarchy store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgHierarchyStore {
    pool: PgPool,
}

impl PgHierarchyStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HierarchyStore for PgHierarchyStore {
    async fn acquire(&self) -> AppResult<StoreLease> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| map_sqlx_error("Failed to acquire connection", e))?;
        Ok(Box::new(PgStoreHandle { conn }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| map_sqlx_error("Health check failed", e))
    }
}

/// One pooled connection, returned to the pool on drop.
#[derive(Debug)]
pub struct PgStoreHandle {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl StoreHandle for PgStoreHandle {
    async fn list_folders_by_owner(&mut self, owner_id: UserId) -> AppResult<Vec<Folder>> {
        FolderRepository::find_by_owner(&mut self.conn, owner_id).await
    }

    async fn get_folder(&mut self, folder_id: FolderId) -> AppResult<Folder> {
        FolderRepository::get(&mut self.conn, folder_id).await
    }

    async fn create_folder(&mut self, owner_id: UserId, name: &str) -> AppResult<Folder> {
        let data = NewFolder::new(owner_id, name)?;
        FolderRepository::create(&mut self.conn, &data).await
    }

    async fn list_documents_by_folder(
        &mut self,
        folder_id: FolderId,
    ) -> AppResult<Vec<DocumentSummary>> {
        DocumentRepository::find_summaries_by_folder(&mut self.conn, folder_id).await
    }

    async fn get_document(&mut self, document_id: DocumentId) -> AppResult<Document> {
        DocumentRepository::get(&mut self.conn, document_id).await
    }

    async fn create_document(
        &mut self,
        folder_id: FolderId,
        document: &NewDocument,
    ) -> AppResult<Document> {
        DocumentRepository::create(&mut self.conn, folder_id, document).await
    }

    async fn update_document(
        &mut self,
        document_id: DocumentId,
        patch: &DocumentPatch,
    ) -> AppResult<Document> {
        DocumentRepository::update(&mut self.conn, document_id, patch).await
    }
}
