//! # amostra-types
//!
//! Domain types for the amostra inventory tracker.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization and chrono for dates).

pub mod error;
pub mod sample;

// Re-exports for convenience.
pub use error::{AmostraError, ErrorKind};
pub use sample::{Sample, SampleFields, SampleId, SampleStatus};
