#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use shortener::application::services::{DEFAULT_MAX_ATTEMPTS, ShortenerService};
use shortener::domain::entities::{NewUrlMapping, UrlMapping};
use shortener::domain::repositories::MappingStore;
use shortener::error::AppError;
use shortener::infrastructure::cache::{CacheResult, CacheService, NullCache};
use shortener::infrastructure::persistence::MemoryMappingStore;
use shortener::state::{AppState, DynShortenerService};
use shortener::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://s.example.com";

pub fn memory_service() -> Arc<DynShortenerService> {
    service_over(Arc::new(MemoryMappingStore::new()))
}

pub fn service_over(store: Arc<dyn MappingStore>) -> Arc<DynShortenerService> {
    let generator: Arc<dyn CodeGenerator> = Arc::new(RandomCodeGenerator);
    Arc::new(ShortenerService::new(store, generator, DEFAULT_MAX_ATTEMPTS))
}

pub fn create_test_state() -> AppState {
    AppState::new(
        memory_service(),
        Arc::new(NullCache::new()),
        Some(BASE_URL.to_string()),
    )
}

pub fn create_test_state_with(
    store: Arc<dyn MappingStore>,
    cache: Arc<dyn CacheService>,
    base_url: Option<&str>,
) -> AppState {
    AppState::new(service_over(store), cache, base_url.map(str::to_string))
}

/// Store whose backend is always down.
pub struct UnavailableStore;

#[async_trait]
impl MappingStore for UnavailableStore {
    async fn try_insert(&self, _new_mapping: NewUrlMapping) -> Result<bool, AppError> {
        Err(AppError::storage_unavailable("Storage backend unavailable", json!({})))
    }

    async fn lookup(&self, _short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage_unavailable("Storage backend unavailable", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage_unavailable("Storage backend unavailable", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Store where every code is already taken.
pub struct FullStore;

#[async_trait]
impl MappingStore for FullStore {
    async fn try_insert(&self, _new_mapping: NewUrlMapping) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn lookup(&self, _short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(None)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(0)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-process cache recording what was written.
#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MapCache {
    pub fn with_entry(code: &str, url: &str) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(code.to_string(), url.to_string());
        cache
    }

    pub fn get(&self, code: &str) -> Option<String> {
        self.entries.lock().unwrap().get(code).cloned()
    }
}

#[async_trait]
impl CacheService for MapCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Ok(self.get(short_code))
    }

    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(short_code.to_string(), long_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
