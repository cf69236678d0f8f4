//! Route definitions for the NoteHub HTTP surface.
//!
//! API routes are mounted under `/api`; the application page lives under
//! `/app`. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{Router, error_handling::HandleErrorLayer, middleware as axum_middleware, routing::get};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(document_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let deadline = middleware::timeout::request_timeout(&state.config.server);

    // Outermost layer first.
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(HandleErrorLayer::new(middleware::timeout::handle_timeout_error))
        .layer(TimeoutLayer::new(deadline));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .fallback(handlers::fallback::route_not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(layers)
        .with_state(state)
}

/// Folder endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route(
            "/folders/{id}/documents",
            get(handlers::folder::list_documents).post(handlers::document::create_document),
        )
}

/// Document endpoints
fn document_routes() -> Router<AppState> {
    Router::new().route(
        "/documents/{id}",
        get(handlers::document::get_document).put(handlers::document::update_document),
    )
}

/// Health endpoint (no session)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Application page
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/app", get(handlers::page::app_root))
        .route("/app/", get(handlers::page::app_root))
        .route("/app/{*segments}", get(handlers::page::app_path))
}
