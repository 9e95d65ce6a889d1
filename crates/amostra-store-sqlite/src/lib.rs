//! # amostra-store-sqlite
//!
//! SQLite adapter for the amostra sample store.
//! Implements `SampleRepository` over a single mutexed connection.

pub mod migrations;
pub mod repository;

mod query_builder;
mod repository_impl;
mod row_mapping;

pub use repository::SqliteSampleRepository;
