//! Client-side folder list with optimistic creation.
//!
//! Creating a folder is a two-phase exchange: the client shows the new
//! folder immediately, then either confirms it with the server's record or
//! rolls it back when the server refuses.

use serde::{Deserialize, Serialize};

use notehub_core::error::{AppError, ErrorKind};
use notehub_entity::folder::Folder;

/// Handle for a folder that is shown but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingFolder {
    token: u64,
    name: String,
}

impl PendingFolder {
    /// Name the user typed.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One row of the client's folder list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderEntry {
    /// Known to the server.
    Confirmed(Folder),
    /// Shown locally, awaiting the server.
    Tentative(PendingFolder),
}

impl FolderEntry {
    /// Display name of the row.
    pub fn name(&self) -> &str {
        match self {
            Self::Confirmed(folder) => &folder.name,
            Self::Tentative(pending) => &pending.name,
        }
    }
}

/// An error surfaced to the user after a rejected action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientError {
    /// Error category.
    pub kind: ErrorKind,
    /// Message suitable for display.
    pub message: String,
    /// Whether offering "try again" makes sense.
    pub retryable: bool,
}

impl From<&AppError> for ClientError {
    fn from(err: &AppError) -> Self {
        Self {
            kind: err.kind,
            message: err.message.clone(),
            retryable: err.is_retryable(),
        }
    }
}

/// The client's view of the user's folders.
#[derive(Debug, Clone, Default)]
pub struct OptimisticFolders {
    entries: Vec<FolderEntry>,
    next_token: u64,
}

impl OptimisticFolders {
    /// Start from the folders the server returned.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            entries: folders.into_iter().map(FolderEntry::Confirmed).collect(),
            next_token: 0,
        }
    }

    /// Rows in display order.
    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    /// Whether any creation is still awaiting the server.
    pub fn has_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, FolderEntry::Tentative(_)))
    }

    /// Show a new folder before the server has answered.
    pub fn apply_tentative(&mut self, name: &str) -> PendingFolder {
        let pending = PendingFolder {
            token: self.next_token,
            name: name.trim().to_string(),
        };
        self.next_token += 1;
        self.entries.push(FolderEntry::Tentative(pending.clone()));
        pending
    }

    /// Replace a tentative row with the server's folder.
    ///
    /// If the row is already gone the folder is appended, since the server
    /// has created it regardless.
    pub fn confirm(&mut self, pending: &PendingFolder, folder: Folder) {
        match self.position(pending) {
            Some(index) => self.entries[index] = FolderEntry::Confirmed(folder),
            None => self.entries.push(FolderEntry::Confirmed(folder)),
        }
    }

    /// Roll back a tentative row after the server refused it.
    pub fn reject(&mut self, pending: &PendingFolder, err: &AppError) -> ClientError {
        if let Some(index) = self.position(pending) {
            self.entries.remove(index);
        }
        ClientError::from(err)
    }

    fn position(&self, pending: &PendingFolder) -> Option<usize> {
        self.entries.iter().position(|entry| {
            matches!(entry, FolderEntry::Tentative(p) if p.token == pending.token)
        })
    }
}
