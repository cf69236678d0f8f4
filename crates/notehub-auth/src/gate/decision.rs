//! Authorization outcomes.

use std::fmt;

use notehub_core::error::AppError;
use notehub_entity::document::Document;
use notehub_entity::folder::Folder;

/// The kinds of resource the gate can rule on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A folder, owned directly.
    Folder,
    /// A document, owned through its folder.
    Document,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "Folder"),
            Self::Document => write!(f, "Document"),
        }
    }
}

/// Why access was refused.
///
/// Kept for internal diagnostics only; callers outside the service always
/// see `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// The resource does not exist.
    Missing,
    /// The resource exists but belongs to another user.
    NotOwner,
    /// The document points at a folder that does not exist.
    DanglingFolder,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::NotOwner => write!(f, "not_owner"),
            Self::DanglingFolder => write!(f, "dangling_folder"),
        }
    }
}

/// What the gate loaded while deciding.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// An owned folder.
    Folder(Folder),
    /// An owned document together with its folder.
    Document {
        /// The document's folder.
        folder: Folder,
        /// The document itself.
        document: Document,
    },
}

/// Result of an authorization check.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Access granted; carries the loaded resource.
    Allow(Resolved),
    /// Access refused.
    Deny(DenyReason),
}

impl Decision {
    /// Whether access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }

    /// Collapse into a result, turning every denial into `NotFound`.
    pub fn into_result(self, kind: ResourceKind, id: impl fmt::Display) -> Result<Resolved, AppError> {
        match self {
            Self::Allow(resolved) => Ok(resolved),
            Self::Deny(_) => Err(AppError::not_found(format!("{kind} {id} not found"))),
        }
    }
}
