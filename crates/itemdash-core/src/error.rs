//! Centralized error types for itemdash.

use thiserror::Error;

/// Main error type for item operations.
#[derive(Error, Debug)]
pub enum DashError {
    /// Caller supplied an unusable request.
    #[error("{0}")]
    Validation(String),

    /// Anything that went wrong talking to the document store.
    #[error("Store error: {0}")]
    Store(#[from] itemdash_store::StoreError),
}

/// Result type for item operations.
pub type DashResult<T> = Result<T, DashError>;

impl DashError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
