//! In-process implementation of the mapping store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Non-durable store keeping mappings in a sharded concurrent map.
///
/// `DashMap::entry` holds the shard write lock for the key while the vacancy
/// check and the insert run, which serializes claims per code. Claims for codes
/// in different shards proceed in parallel. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryMappingStore {
    mappings: DashMap<String, UrlMapping>,
    last_id: AtomicI64,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn try_insert(&self, new_mapping: NewUrlMapping) -> Result<bool, AppError> {
        match self.mappings.entry(new_mapping.short_code) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
                let short_code = entry.key().clone();
                entry.insert(UrlMapping::new(
                    id,
                    short_code,
                    new_mapping.long_url,
                    Utc::now(),
                ));
                Ok(true)
            }
        }
    }

    async fn lookup(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self
            .mappings
            .get(short_code)
            .map(|mapping| mapping.value().clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.mappings.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
