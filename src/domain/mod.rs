//! Domain layer containing the mapping entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - The persisted [`entities::UrlMapping`] and its creation input
//! - [`repositories`] - The [`repositories::MappingStore`] contract implemented in
//!   `crate::infrastructure::persistence`
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
