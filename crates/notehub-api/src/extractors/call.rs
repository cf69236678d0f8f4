//! The per-call pipeline for authenticated API routes.
//!
//! [`ApiCall`] runs, in order: path and body validation, session
//! resolution, store handle acquisition, and authorization of the targeted
//! resource. The first failing stage short-circuits the rest. The handle
//! lives inside the extracted value, so it is released when the handler
//! returns, fails, or is cancelled.

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use notehub_auth::gate::AuthorizationGate;
use notehub_core::error::AppError;
use notehub_core::types::{DocumentId, FolderId};
use notehub_database::store::{StoreHandle, StoreLease};
use notehub_entity::document::Document;
use notehub_entity::folder::Folder;
use notehub_entity::user::Identity;
use notehub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// What a route operates on, named by its path.
#[async_trait]
pub trait CallTarget: Sized + Send + 'static {
    /// What authorization hands to the handler.
    type Resolved: Send;

    /// Name of the path parameter carrying the target id, if any.
    const PATH_PARAM: Option<&'static str>;

    /// Validate the raw path parameter.
    fn parse(raw: Option<&str>) -> Result<Self, AppError>;

    /// Check ownership and load the target.
    async fn authorize(
        self,
        gate: &AuthorizationGate,
        identity: &Identity,
        store: &mut dyn StoreHandle,
    ) -> Result<Self::Resolved, AppError>;
}

/// Routes scoped to the caller, such as listing their folders.
#[derive(Debug, Clone, Copy)]
pub struct NoTarget;

#[async_trait]
impl CallTarget for NoTarget {
    type Resolved = ();

    const PATH_PARAM: Option<&'static str> = None;

    fn parse(_raw: Option<&str>) -> Result<Self, AppError> {
        Ok(Self)
    }

    async fn authorize(
        self,
        _gate: &AuthorizationGate,
        _identity: &Identity,
        _store: &mut dyn StoreHandle,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

/// A folder addressed by `{id}`.
#[derive(Debug, Clone, Copy)]
pub struct FolderTarget(pub FolderId);

#[async_trait]
impl CallTarget for FolderTarget {
    type Resolved = Folder;

    const PATH_PARAM: Option<&'static str> = Some("id");

    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.ok_or_else(|| AppError::validation("Missing folder id"))?;
        Ok(Self(FolderId::parse(raw)?))
    }

    async fn authorize(
        self,
        gate: &AuthorizationGate,
        identity: &Identity,
        store: &mut dyn StoreHandle,
    ) -> Result<Folder, AppError> {
        gate.require_folder(identity, self.0, store).await
    }
}

/// A document addressed by `{id}`, resolved together with its folder.
#[derive(Debug, Clone, Copy)]
pub struct DocumentTarget(pub DocumentId);

#[async_trait]
impl CallTarget for DocumentTarget {
    type Resolved = (Folder, Document);

    const PATH_PARAM: Option<&'static str> = Some("id");

    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.ok_or_else(|| AppError::validation("Missing document id"))?;
        Ok(Self(DocumentId::parse(raw)?))
    }

    async fn authorize(
        self,
        gate: &AuthorizationGate,
        identity: &Identity,
        store: &mut dyn StoreHandle,
    ) -> Result<(Folder, Document), AppError> {
        gate.require_document(identity, self.0, store).await
    }
}

/// A request body the pipeline can decode.
pub trait CallBody: Sized + Send + 'static {
    /// Whether the request body is read at all.
    const EXPECTS_BODY: bool;

    /// Decode and validate.
    fn from_bytes(bytes: &[u8]) -> Result<Self, AppError>;
}

/// Routes without a request body.
#[derive(Debug, Clone, Copy)]
pub struct NoBody;

impl CallBody for NoBody {
    const EXPECTS_BODY: bool = false;

    fn from_bytes(_bytes: &[u8]) -> Result<Self, AppError> {
        Ok(Self)
    }
}

/// A JSON body that passed both serde and `validator` checks.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> CallBody for Validated<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
{
    const EXPECTS_BODY: bool = true;

    fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        let value: T = serde_json::from_slice(bytes)?;
        value
            .validate()
            .map_err(|e| AppError::validation(format!("Validation failed: {e}")))?;
        Ok(Self(value))
    }
}

/// An authenticated, authorized API call.
///
/// Fields are public so handlers can borrow them independently.
pub struct ApiCall<T: CallTarget = NoTarget, B: CallBody = NoBody> {
    /// Who is calling.
    pub ctx: RequestContext,
    /// Store handle held for the duration of the call.
    pub store: StoreLease,
    /// The authorized target.
    pub resource: T::Resolved,
    /// The decoded body.
    pub body: B,
}

impl<T, B> FromRequest<AppState> for ApiCall<T, B>
where
    T: CallTarget,
    B: CallBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let raw_id = match T::PATH_PARAM {
            Some(name) => {
                let params = RawPathParams::from_request_parts(&mut parts, state)
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
            }
            None => None,
        };
        let target = T::parse(raw_id.as_deref())?;

        let body = if B::EXPECTS_BODY {
            let bytes = to_bytes(body, state.config.server.body_limit_bytes)
                .await
                .map_err(|e| AppError::validation(format!("Failed to read request body: {e}")))?;
            B::from_bytes(&bytes)?
        } else {
            B::from_bytes(&[])?
        };

        let credentials =
            super::credentials_from_headers(&parts.headers, &state.config.auth.cookie_name);
        let identity = state
            .sessions
            .resolve(&credentials)?
            .ok_or_else(|| AppError::unauthorized("Session expired, please sign in"))?;

        let mut store = state.store.acquire().await?;

        let resource = target
            .authorize(&state.gate, &identity, store.as_mut())
            .await?;

        debug!(
            user_id = %identity.user_id,
            path = %parts.uri.path(),
            "API call authorized"
        );

        Ok(Self {
            ctx: RequestContext::new(identity),
            store,
            resource,
            body,
        })
    }
}
