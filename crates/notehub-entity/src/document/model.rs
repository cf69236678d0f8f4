//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use notehub_core::error::AppError;
use notehub_core::types::{DocumentId, FolderId};

/// Longest accepted document title, in characters.
pub const MAX_TITLE_LEN: usize = 255;

/// A document stored inside a folder.
///
/// Access is derived from the owning folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// The folder this document belongs to.
    pub folder_id: FolderId,
    /// Document title.
    pub title: String,
    /// Structured document body.
    pub content: Value,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// List-view projection without the body.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id,
            folder_id: self.folder_id,
            title: self.title.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Document metadata for folder listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DocumentSummary {
    /// Document identifier.
    pub id: DocumentId,
    /// Owning folder.
    pub folder_id: FolderId,
    /// Document title.
    pub title: String,
    /// When the document was last changed.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Initial body.
    pub content: Value,
}

impl NewDocument {
    /// Validate and normalize a document creation request.
    ///
    /// A missing body starts as an empty object so later patches can merge
    /// keys into it.
    pub fn new(title: &str, content: Option<Value>) -> Result<Self, AppError> {
        Ok(Self {
            title: validate_title(title)?,
            content: content.unwrap_or_else(|| Value::Object(Default::default())),
        })
    }
}

/// Trim a title and enforce the length bounds.
pub(crate) fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::validation("Document title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::validation(format!(
            "Document title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}
