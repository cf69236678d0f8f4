//! The authorization gate.
//!
//! Folders are checked against their owner. Documents have no owner of
//! their own: the gate loads the document's folder and applies the folder
//! rule. Ownership chains are exactly two links long.

use tracing::debug;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::types::{DocumentId, FolderId};
use notehub_database::store::StoreHandle;
use notehub_entity::document::Document;
use notehub_entity::folder::Folder;
use notehub_entity::user::Identity;

use super::decision::{Decision, DenyReason, ResourceKind, Resolved};

/// Decides whether an identity may touch a folder or document.
///
/// Stateless; all lookups go through the caller's store handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGate;

impl AuthorizationGate {
    /// Creates a gate.
    pub fn new() -> Self {
        Self
    }

    /// Decide on a folder.
    ///
    /// Store failures other than a missing record propagate as errors; they
    /// are not denials.
    pub async fn check_folder(
        &self,
        identity: &Identity,
        folder_id: FolderId,
        store: &mut dyn StoreHandle,
    ) -> Result<Decision, AppError> {
        let decision = match absent_as_none(store.get_folder(folder_id).await)? {
            None => Decision::Deny(DenyReason::Missing),
            Some(folder) => owner_decision(identity, folder, None),
        };
        log_decision(identity, ResourceKind::Folder, &folder_id, &decision);
        Ok(decision)
    }

    /// Decide on a document by way of its folder.
    pub async fn check_document(
        &self,
        identity: &Identity,
        document_id: DocumentId,
        store: &mut dyn StoreHandle,
    ) -> Result<Decision, AppError> {
        let decision = match absent_as_none(store.get_document(document_id).await)? {
            None => Decision::Deny(DenyReason::Missing),
            Some(document) => match absent_as_none(store.get_folder(document.folder_id).await)? {
                None => Decision::Deny(DenyReason::DanglingFolder),
                Some(folder) => owner_decision(identity, folder, Some(document)),
            },
        };
        log_decision(identity, ResourceKind::Document, &document_id, &decision);
        Ok(decision)
    }

    /// Generic entry point keyed by resource kind.
    ///
    /// Malformed ids are validation failures, not denials.
    pub async fn authorize(
        &self,
        identity: &Identity,
        kind: ResourceKind,
        resource_id: &str,
        store: &mut dyn StoreHandle,
    ) -> Result<Decision, AppError> {
        match kind {
            ResourceKind::Folder => {
                let id = FolderId::parse(resource_id)?;
                self.check_folder(identity, id, store).await
            }
            ResourceKind::Document => {
                let id = DocumentId::parse(resource_id)?;
                self.check_document(identity, id, store).await
            }
        }
    }

    /// Load a folder the identity owns, or fail with `NotFound`.
    pub async fn require_folder(
        &self,
        identity: &Identity,
        folder_id: FolderId,
        store: &mut dyn StoreHandle,
    ) -> Result<Folder, AppError> {
        match self
            .check_folder(identity, folder_id, store)
            .await?
            .into_result(ResourceKind::Folder, folder_id)?
        {
            Resolved::Folder(folder) => Ok(folder),
            Resolved::Document { folder, .. } => Ok(folder),
        }
    }

    /// Load a document the identity owns plus its folder, or fail with `NotFound`.
    pub async fn require_document(
        &self,
        identity: &Identity,
        document_id: DocumentId,
        store: &mut dyn StoreHandle,
    ) -> Result<(Folder, Document), AppError> {
        match self
            .check_document(identity, document_id, store)
            .await?
            .into_result(ResourceKind::Document, document_id)?
        {
            Resolved::Document { folder, document } => Ok((folder, document)),
            Resolved::Folder(_) => Err(AppError::internal(
                "Document check resolved to a folder",
            )),
        }
    }
}

fn owner_decision(identity: &Identity, folder: Folder, document: Option<Document>) -> Decision {
    if !folder.is_owned_by(identity.user_id) {
        return Decision::Deny(DenyReason::NotOwner);
    }
    match document {
        Some(document) => Decision::Allow(Resolved::Document { folder, document }),
        None => Decision::Allow(Resolved::Folder(folder)),
    }
}

fn absent_as_none<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn log_decision(
    identity: &Identity,
    kind: ResourceKind,
    resource_id: &dyn std::fmt::Display,
    decision: &Decision,
) {
    if let Decision::Deny(reason) = decision {
        debug!(
            user_id = %identity.user_id,
            resource = %kind,
            resource_id = %resource_id,
            reason = %reason,
            "Access denied"
        );
    }
}
