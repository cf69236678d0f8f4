//! Folder repository implementation.

use sqlx::PgConnection;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_core::types::{FolderId, UserId};
use notehub_entity::folder::{Folder, NewFolder};

use crate::error::map_sqlx_error;

const FOLDER_COLUMNS: &str = "id, owner_id, name, created_at";

/// Folder queries, run on a connection checked out by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderRepository;

impl FolderRepository {
    /// Find a folder by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1"))
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| map_sqlx_error("Failed to find folder", e))
    }

    /// Find a folder by ID or fail with `NotFound`.
    pub async fn get(conn: &mut PgConnection, id: FolderId) -> AppResult<Folder> {
        Self::find_by_id(conn, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// List every folder owned by a user, oldest first.
    pub async fn find_by_owner(conn: &mut PgConnection, owner_id: UserId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE owner_id = $1 \
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(owner_id)
        .fetch_all(conn)
        .await
        .map_err(|e| map_sqlx_error("Failed to list folders", e))
    }

    /// Create a new folder.
    pub async fn create(conn: &mut PgConnection, data: &NewFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (id, owner_id, name) VALUES ($1, $2, $3) \
             RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(FolderId::new())
        .bind(data.owner_id)
        .bind(&data.name)
        .fetch_one(conn)
        .await
        .map_err(|e| map_sqlx_error("Failed to create folder", e))
    }
}
