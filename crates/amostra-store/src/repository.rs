//! Abstract repository trait (port) for sample storage.

use async_trait::async_trait;
use thiserror::Error;

use amostra_types::{Sample, SampleFields, SampleId};

use crate::query::SampleQuery;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested sample was not found.
    #[error("sample not found: {id}")]
    NotFound { id: i64 },
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Abstract trait for sample persistence.
///
/// Implementations live in adapter crates (e.g., `amostra-store-sqlite`).
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Finds a sample by its unique id.
    async fn find_by_id(&self, id: SampleId) -> Result<Option<Sample>, RepositoryError>;

    /// Finds samples matching a query, ordered by id.
    async fn find_all(&self, query: SampleQuery) -> Result<Vec<Sample>, RepositoryError>;

    /// Inserts a new sample and returns the store-assigned id.
    async fn insert(&self, fields: &SampleFields) -> Result<SampleId, RepositoryError>;

    /// Overwrites all mutable fields of an existing sample.
    /// Returns `NotFound` when no row matches the id.
    async fn update(&self, sample: &Sample) -> Result<(), RepositoryError>;

    /// Returns the total number of stored samples.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
