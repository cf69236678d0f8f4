//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_entity::document::{DocumentPatch, NewDocument};

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFolderRequest {
    /// Folder name. Surrounding whitespace is trimmed by the store.
    #[validate(length(min = 1, max = 255, message = "Folder name must be 1-255 characters"))]
    pub name: String,
}

/// Create document request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDocumentRequest {
    /// Document title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// Initial body; defaults to an empty object.
    #[serde(default)]
    pub content: Option<Value>,
}

impl CreateDocumentRequest {
    /// Convert into the store's creation input.
    pub fn to_new_document(&self) -> Result<NewDocument, AppError> {
        NewDocument::new(&self.title, self.content.clone())
    }
}

/// Update document request body. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateDocumentRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    #[serde(default)]
    pub title: Option<String>,
    /// Merge patch for the body.
    #[serde(default)]
    pub content: Option<Value>,
}

impl UpdateDocumentRequest {
    /// Convert into a store patch.
    pub fn into_patch(self) -> DocumentPatch {
        DocumentPatch {
            title: self.title,
            content: self.content,
        }
    }
}
