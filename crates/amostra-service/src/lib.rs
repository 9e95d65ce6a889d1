//! # amostra-service
//!
//! The record service: search, create and update operations over an
//! abstract `SampleRepository`, with required-field validation.

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::SampleService;
