//! Mapping store implementations.
//!
//! - [`PgMappingStore`] - PostgreSQL via SQLx, durable
//! - [`MemoryMappingStore`] - in-process `DashMap`, for development and tests

pub mod memory_mapping_store;
pub mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
