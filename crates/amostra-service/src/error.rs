//! Error types for the record service.

use thiserror::Error;

use amostra_store::RepositoryError;

/// Errors returned by `SampleService` operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field was empty at creation time. No write occurred.
    #[error("required field is empty: {field}")]
    Validation { field: &'static str },
    /// The targeted sample does not exist.
    #[error("sample not found: {id}")]
    NotFound { id: i64 },
    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
