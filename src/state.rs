//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingStore;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::CodeGenerator;

/// Shortener service over whichever store and generator were selected at startup.
pub type DynShortenerService = ShortenerService<dyn MappingStore, dyn CodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<DynShortenerService>,
    pub cache: Arc<dyn CacheService>,
    /// Public origin prepended to codes in API responses (`BASE_URL`).
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<DynShortenerService>,
        cache: Arc<dyn CacheService>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            shortener_service,
            cache,
            base_url,
        }
    }
}
