//! Folder operations for the acting user.

use tracing::info;

use notehub_core::error::AppError;
use notehub_database::store::StoreHandle;
use notehub_entity::document::DocumentSummary;
use notehub_entity::folder::Folder;

use crate::context::RequestContext;

/// Manages folders owned by the acting user.
///
/// Methods that take a [`Folder`] expect one the authorization gate
/// has already resolved for `ctx`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderService;

impl FolderService {
    /// Creates a new folder service.
    pub fn new() -> Self {
        Self
    }

    /// Lists the acting user's folders.
    pub async fn list_owned(
        &self,
        ctx: &RequestContext,
        store: &mut dyn StoreHandle,
    ) -> Result<Vec<Folder>, AppError> {
        store.list_folders_by_owner(ctx.user_id()).await
    }

    /// Creates a folder owned by the acting user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        store: &mut dyn StoreHandle,
    ) -> Result<Folder, AppError> {
        let folder = store.create_folder(ctx.user_id(), name).await?;

        info!(
            user_id = %ctx.user_id(),
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Lists the documents of an owned folder, without bodies.
    pub async fn documents(
        &self,
        folder: &Folder,
        store: &mut dyn StoreHandle,
    ) -> Result<Vec<DocumentSummary>, AppError> {
        store.list_documents_by_folder(folder.id).await
    }
}
