//! Error types for the payment records service.

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Service-level errors returned across the service boundary.
///
/// The HTTP adapter checks the known kinds by pattern match; everything
/// else falls through to the shared server-error responder.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict(msg) => ServiceError::AlreadyExists(msg),
            RepoError::Database(msg) => ServiceError::Internal(msg),
        }
    }
}
