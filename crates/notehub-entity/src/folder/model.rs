//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notehub_core::error::AppError;
use notehub_core::types::{FolderId, UserId};

/// Longest accepted folder name, in characters.
pub const MAX_FOLDER_NAME_LEN: usize = 255;

/// A folder owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The only user allowed to see or change this folder.
    pub owner_id: UserId,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check whether `user_id` owns this folder.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFolder {
    /// The folder owner.
    pub owner_id: UserId,
    /// Trimmed, non-empty folder name.
    pub name: String,
}

impl NewFolder {
    /// Validate and normalize a folder creation request.
    pub fn new(owner_id: UserId, name: &str) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        if name.chars().count() > MAX_FOLDER_NAME_LEN {
            return Err(AppError::validation(format!(
                "Folder name cannot exceed {MAX_FOLDER_NAME_LEN} characters"
            )));
        }
        Ok(Self {
            owner_id,
            name: name.to_string(),
        })
    }
}
