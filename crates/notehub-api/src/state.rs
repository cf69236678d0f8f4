//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notehub_auth::gate::AuthorizationGate;
use notehub_auth::jwt::JwtDecoder;
use notehub_auth::session::SessionResolver;
use notehub_core::config::AppConfig;
use notehub_database::store::HierarchyStore;
use notehub_service::{DocumentService, FolderService, PageComposer};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// Shared fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Hierarchy store (PostgreSQL pool or in-process)
    pub store: Arc<dyn HierarchyStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token resolver
    pub sessions: Arc<SessionResolver>,
    /// Ownership checks
    pub gate: AuthorizationGate,

    // ── Services ─────────────────────────────────────────────
    /// Folder service
    pub folder_service: FolderService,
    /// Document service
    pub document_service: DocumentService,
    /// Application page composer
    pub page_composer: PageComposer,
}

impl AppState {
    /// Wire up state from configuration and an opened store.
    pub fn new(config: AppConfig, store: Arc<dyn HierarchyStore>) -> Self {
        let gate = AuthorizationGate::new();
        let sessions = Arc::new(SessionResolver::new(JwtDecoder::new(&config.auth)));

        Self {
            config: Arc::new(config),
            store,
            sessions,
            gate,
            folder_service: FolderService::new(),
            document_service: DocumentService::new(),
            page_composer: PageComposer::new(gate),
        }
    }
}
