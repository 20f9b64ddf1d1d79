//! Repository trait for short code mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing storage of [`UrlMapping`] records.
///
/// The store owns the invariant that at most one mapping exists per short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL, unique constraint
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-process, per-key lock
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Inserts the mapping if no record with its short code exists.
    ///
    /// The existence check and the insert are a single atomic step: of any number of
    /// concurrent calls with the same short code, at most one returns `Ok(true)`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the mapping was persisted
    /// - `Ok(false)` if the code is already taken; storage is left unchanged
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the backend cannot complete the write.
    async fn try_insert(&self, new_mapping: NewUrlMapping) -> Result<bool, AppError>;

    /// Finds the mapping for a short code.
    ///
    /// Observes every insert that previously returned `Ok(true)`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if no mapping exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend failure, never `Ok(None)`.
    async fn lookup(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend failure.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
