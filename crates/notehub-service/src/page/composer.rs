//! Builds view models from a session and a navigation path.

use tracing::debug;

use notehub_auth::gate::AuthorizationGate;
use notehub_core::error::AppError;
use notehub_database::store::HierarchyStore;
use notehub_entity::user::Identity;

use super::path::PagePath;
use super::view::{PageOutcome, ViewModel};

/// Composes the application page for one navigation.
///
/// Output depends only on the identity, the path and the stored data, so
/// repeating a navigation reproduces the same view model.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageComposer {
    gate: AuthorizationGate,
}

impl PageComposer {
    /// Creates a composer that authorizes through `gate`.
    pub fn new(gate: AuthorizationGate) -> Self {
        Self { gate }
    }

    /// Compose from raw path segments.
    ///
    /// Without an identity the store is never touched.
    pub async fn compose<S: AsRef<str> + Sync>(
        &self,
        identity: Option<&Identity>,
        segments: &[S],
        store: &dyn HierarchyStore,
    ) -> Result<PageOutcome, AppError> {
        self.compose_parsed(identity, || PagePath::parse(segments), store)
            .await
    }

    /// Compose from the raw tail of a URL, such as `a/b` or `a/b/`.
    pub async fn compose_tail(
        &self,
        identity: Option<&Identity>,
        tail: &str,
        store: &dyn HierarchyStore,
    ) -> Result<PageOutcome, AppError> {
        self.compose_parsed(identity, || PagePath::from_tail(tail), store)
            .await
    }

    async fn compose_parsed<F>(
        &self,
        identity: Option<&Identity>,
        parse: F,
        store: &dyn HierarchyStore,
    ) -> Result<PageOutcome, AppError>
    where
        F: FnOnce() -> Result<PagePath, AppError>,
    {
        let Some(identity) = identity else {
            debug!("No session, page not composed");
            return Ok(PageOutcome::Unauthenticated);
        };
        let path = parse()?;
        self.compose_path(identity, path, store).await.map(PageOutcome::Ready)
    }

    /// Compose an already parsed path for a signed-in user.
    ///
    /// A folder the user cannot see, or a document outside the selected
    /// folder, fails the whole page with `NotFound`.
    pub async fn compose_path(
        &self,
        identity: &Identity,
        path: PagePath,
        store: &dyn HierarchyStore,
    ) -> Result<ViewModel, AppError> {
        let mut handle = store.acquire().await?;

        let mut view = ViewModel {
            folders: handle.list_folders_by_owner(identity.user_id).await?,
            ..ViewModel::default()
        };

        let Some(folder_id) = path.folder_id() else {
            return Ok(view);
        };

        let folder = self
            .gate
            .require_folder(identity, folder_id, handle.as_mut())
            .await?;
        view.documents = handle.list_documents_by_folder(folder.id).await?;

        if let PagePath::Document(_, document_id) = path {
            let (owner_folder, document) = self
                .gate
                .require_document(identity, document_id, handle.as_mut())
                .await?;
            if owner_folder.id != folder.id {
                debug!(
                    user_id = %identity.user_id,
                    folder_id = %folder.id,
                    document_id = %document_id,
                    "Document requested outside its folder"
                );
                return Err(AppError::not_found(format!(
                    "Document {document_id} not found"
                )));
            }
            view.active_document = Some(document);
        }

        view.active_folder = Some(folder);
        Ok(view)
    }
}
