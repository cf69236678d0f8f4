//! Folder handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use notehub_entity::document::DocumentSummary;
use notehub_entity::folder::Folder;

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiCall, FolderTarget, NoBody, NoTarget, Validated};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    mut call: ApiCall,
) -> ApiResult<Json<ApiResponse<Vec<Folder>>>> {
    let folders = state
        .folder_service
        .list_owned(&call.ctx, call.store.as_mut())
        .await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    mut call: ApiCall<NoTarget, Validated<CreateFolderRequest>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Folder>>)> {
    let folder = state
        .folder_service
        .create(&call.ctx, &call.body.0.name, call.store.as_mut())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// GET /api/folders/{id}
pub async fn get_folder(call: ApiCall<FolderTarget, NoBody>) -> Json<ApiResponse<Folder>> {
    Json(ApiResponse::ok(call.resource))
}

/// GET /api/folders/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    mut call: ApiCall<FolderTarget, NoBody>,
) -> ApiResult<Json<ApiResponse<Vec<DocumentSummary>>>> {
    let documents = state
        .folder_service
        .documents(&call.resource, call.store.as_mut())
        .await?;
    Ok(Json(ApiResponse::ok(documents)))
}
