//! # amostra-store
//!
//! Port definitions (abstract traits) for sample persistence.
//! Adapter crates implement these traits.

pub mod query;
pub mod repository;

pub use query::SampleQuery;
pub use repository::{RepositoryError, SampleRepository};
