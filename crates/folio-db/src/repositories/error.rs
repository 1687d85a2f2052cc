//! Error handling utilities for repositories

use folio_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
///
/// Connectivity failures become `BackendUnavailable` so callers can retry;
/// everything else is an internal error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::WorkerCrashed => DomainError::BackendUnavailable(e.to_string()),
        other => {
            error!(error = %other, "Database query failed");
            DomainError::InternalError(other.to_string())
        }
    }
}

/// Check for unique violation and return appropriate error or fallback.
///
/// `on_unique` receives the violated constraint name when the driver reports one.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    map_db_error(e)
}
