//! Document operations inside owned folders.

use tracing::info;

use notehub_core::error::AppError;
use notehub_database::store::StoreHandle;
use notehub_entity::document::{Document, DocumentPatch, NewDocument};
use notehub_entity::folder::Folder;

use crate::context::RequestContext;

/// Creates and edits documents.
///
/// Documents carry no owner of their own. Every method takes resources
/// that were resolved through the folder owner by the authorization gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentService;

impl DocumentService {
    /// Creates a new document service.
    pub fn new() -> Self {
        Self
    }

    /// Creates a document in an owned folder.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        folder: &Folder,
        new_document: &NewDocument,
        store: &mut dyn StoreHandle,
    ) -> Result<Document, AppError> {
        let document = store.create_document(folder.id, new_document).await?;

        info!(
            user_id = %ctx.user_id(),
            folder_id = %folder.id,
            document_id = %document.id,
            "Document created"
        );

        Ok(document)
    }

    /// Merges a patch into an owned document.
    ///
    /// An empty patch still bumps `updated_at`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        document: &Document,
        patch: &DocumentPatch,
        store: &mut dyn StoreHandle,
    ) -> Result<Document, AppError> {
        patch.validate()?;
        let updated = store.update_document(document.id, patch).await?;

        info!(
            user_id = %ctx.user_id(),
            document_id = %updated.id,
            title_changed = patch.title.is_some(),
            content_changed = patch.content.is_some(),
            "Document updated"
        );

        Ok(updated)
    }
}
