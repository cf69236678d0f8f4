//! PostgreSQL connection pool management and store selection.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use notehub_core::config::{DatabaseConfig, StoreProvider};
use notehub_core::error::{AppError, ErrorKind};

use crate::memory::MemoryHierarchyStore;
use crate::migration::run_migrations;
use crate::repositories::PgHierarchyStore;
use crate::store::HierarchyStore;

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

/// Open the store selected by `config.provider`.
///
/// For PostgreSQL this connects the pool and, if enabled, applies pending
/// migrations before returning.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn HierarchyStore>, AppError> {
    match config.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(config).await?.into_pool();
            if config.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(PgHierarchyStore::new(pool)))
        }
        StoreProvider::Memory => {
            info!("Using in-memory hierarchy store; data will not survive a restart");
            Ok(Arc::new(MemoryHierarchyStore::new()))
        }
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
