//! View models produced by the page composer.

use serde::{Deserialize, Serialize};

use notehub_entity::document::{Document, DocumentSummary};
use notehub_entity::folder::Folder;

/// Everything the application shell renders for one navigation.
///
/// `active_document` is only ever set together with `active_folder`, and
/// then it belongs to that folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// All folders the user owns, oldest first.
    pub folders: Vec<Folder>,
    /// The selected folder.
    pub active_folder: Option<Folder>,
    /// Summaries of the selected folder's documents; empty without one.
    pub documents: Vec<DocumentSummary>,
    /// The selected document.
    pub active_document: Option<Document>,
}

impl ViewModel {
    /// Whether the active document, if any, sits in the active folder.
    pub fn is_consistent(&self) -> bool {
        match (&self.active_folder, &self.active_document) {
            (_, None) => true,
            (Some(folder), Some(document)) => document.folder_id == folder.id,
            (None, Some(_)) => false,
        }
    }
}

/// Result of composing a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// There is no live session; the client should send the user to sign in.
    Unauthenticated,
    /// The page is ready to render.
    Ready(ViewModel),
}

impl PageOutcome {
    /// The view model, when the page is ready.
    pub fn view(&self) -> Option<&ViewModel> {
        match self {
            Self::Ready(view) => Some(view),
            Self::Unauthenticated => None,
        }
    }
}
