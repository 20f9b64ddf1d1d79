//! Storage contract for the domain layer.
//!
//! [`MappingStore`] is implemented by `crate::infrastructure::persistence`
//! (PostgreSQL and in-memory). A `mockall` mock is generated for unit tests.

pub mod mapping_store;

pub use mapping_store::MappingStore;

#[cfg(test)]
pub use mapping_store::MockMappingStore;
