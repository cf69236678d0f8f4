//! Classification of sqlx failures into application errors.

use notehub_core::error::{AppError, ErrorKind};

/// Map a sqlx error, keeping it as the source.
///
/// Pool exhaustion and transport failures mean the store is unreachable
/// and become `StoreUnavailable`; everything else is `Internal`.
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => ErrorKind::StoreUnavailable,
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        _ => ErrorKind::Internal,
    };

    if kind == ErrorKind::StoreUnavailable {
        tracing::warn!(error = %err, context, "Store unavailable");
    }

    AppError::with_source(kind, format!("{context}: {err}"), err)
}
