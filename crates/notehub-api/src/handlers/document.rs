//! Document handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use notehub_entity::document::Document;

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiCall, DocumentTarget, FolderTarget, NoBody, Validated};
use crate::state::AppState;

/// POST /api/folders/{id}/documents
pub async fn create_document(
    State(state): State<AppState>,
    mut call: ApiCall<FolderTarget, Validated<CreateDocumentRequest>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Document>>)> {
    let new_document = call.body.0.to_new_document()?;
    let document = state
        .document_service
        .create(&call.ctx, &call.resource, &new_document, call.store.as_mut())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(document))))
}

/// GET /api/documents/{id}
pub async fn get_document(call: ApiCall<DocumentTarget, NoBody>) -> Json<ApiResponse<Document>> {
    let (_, document) = call.resource;
    Json(ApiResponse::ok(document))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    mut call: ApiCall<DocumentTarget, Validated<UpdateDocumentRequest>>,
) -> ApiResult<Json<ApiResponse<Document>>> {
    let Validated(request) = call.body;
    let (_, document) = &call.resource;
    let updated = state
        .document_service
        .update(&call.ctx, document, &request.into_patch(), call.store.as_mut())
        .await?;
    Ok(Json(ApiResponse::ok(updated)))
}
