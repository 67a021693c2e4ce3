//! Typed error enum for the service layer.

use marketmood_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage failures and input rejection.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input that survived boundary validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Referential-integrity rejection: the referenced instrument does not
    /// exist. Distinct from "instrument exists but has no data".
    pub fn instrument_not_found(id: i32) -> Self {
        Self::Storage(StorageError::NotFound { entity: "instrument", id: i64::from(id) })
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::InvalidInput(_) => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
