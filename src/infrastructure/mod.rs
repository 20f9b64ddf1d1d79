//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Read-through cache for resolved mappings (Redis and no-op)
//! - [`persistence`] - Mapping store implementations

pub mod cache;
pub mod persistence;
