//! Document repository implementation.

use chrono::Utc;
use sqlx::{Connection, PgConnection};

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_core::types::{DocumentId, FolderId};
use notehub_entity::document::{Document, DocumentPatch, DocumentSummary, NewDocument};

use crate::error::map_sqlx_error;

const DOCUMENT_COLUMNS: &str = "id, folder_id, title, content, created_at, updated_at";

/// Document queries, run on a connection checked out by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRepository;

impl DocumentRepository {
    /// Find a document by ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DocumentId,
    ) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| map_sqlx_error("Failed to find document", e))
    }

    /// Find a document by ID or fail with `NotFound`.
    pub async fn get(conn: &mut PgConnection, id: DocumentId) -> AppResult<Document> {
        Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// List summaries of the documents in a folder, oldest first.
    pub async fn find_summaries_by_folder(
        conn: &mut PgConnection,
        folder_id: FolderId,
    ) -> AppResult<Vec<DocumentSummary>> {
        sqlx::query_as::<_, DocumentSummary>(
            "SELECT id, folder_id, title, updated_at FROM documents WHERE folder_id = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(folder_id)
        .fetch_all(conn)
        .await
        .map_err(|e| map_sqlx_error("Failed to list documents", e))
    }

    /// Create a new document.
    pub async fn create(
        conn: &mut PgConnection,
        folder_id: FolderId,
        data: &NewDocument,
    ) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(&format!(
            "INSERT INTO documents (id, folder_id, title, content) VALUES ($1, $2, $3, $4) \
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(DocumentId::new())
        .bind(folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(conn)
        .await
        .map_err(|e| map_sqlx_error("Failed to create document", e))
    }

    /// Merge a patch into a stored document.
    ///
    /// The row is locked for the read-merge-write so concurrent patches to
    /// the same document serialize; the last one to commit wins.
    pub async fn update(
        conn: &mut PgConnection,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> AppResult<Document> {
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Failed to begin transaction", e))?;

        let mut document = sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to load document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        patch.apply(&mut document, Utc::now())?;

        let updated = sqlx::query_as::<_, Document>(&format!(
            "UPDATE documents SET title = $2, content = $3, updated_at = $4 WHERE id = $1 \
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(&document.title)
        .bind(&document.content)
        .bind(document.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to update document", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Failed to commit document update", e))?;

        Ok(updated)
    }
}
