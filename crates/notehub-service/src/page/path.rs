//! Navigation paths.

use std::fmt;

use notehub_core::error::AppError;
use notehub_core::types::{DocumentId, FolderId};

/// Longest path the application understands: folder then document.
pub const MAX_SEGMENTS: usize = 2;

/// Where the user navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagePath {
    /// No segments: the folder list.
    Root,
    /// One segment: a folder and its documents.
    Folder(FolderId),
    /// Two segments: a document inside its folder.
    Document(FolderId, DocumentId),
}

impl PagePath {
    /// Parse path segments.
    ///
    /// Empty segments are ignored, so `a//b` and `a/b/` read as `a/b`.
    pub fn parse<S: AsRef<str>>(segments: &[S]) -> Result<Self, AppError> {
        let parts: Vec<&str> = segments
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [] => Ok(Self::Root),
            [folder] => Ok(Self::Folder(FolderId::parse(folder)?)),
            [folder, document] => Ok(Self::Document(
                FolderId::parse(folder)?,
                DocumentId::parse(document)?,
            )),
            _ => Err(AppError::validation(format!(
                "Path has {} segments, at most {MAX_SEGMENTS} are allowed",
                parts.len()
            ))),
        }
    }

    /// Split a raw `a/b` tail into segments and parse it.
    pub fn from_tail(tail: &str) -> Result<Self, AppError> {
        let segments: Vec<&str> = tail.split('/').collect();
        Self::parse(&segments)
    }

    /// The selected folder, if any.
    pub fn folder_id(&self) -> Option<FolderId> {
        match self {
            Self::Root => None,
            Self::Folder(folder) | Self::Document(folder, _) => Some(*folder),
        }
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "/"),
            Self::Folder(folder) => write!(f, "/{folder}"),
            Self::Document(folder, document) => write!(f, "/{folder}/{document}"),
        }
    }
}
