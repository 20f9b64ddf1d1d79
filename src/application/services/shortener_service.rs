//! Short code creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{MAX_LONG_URL_LENGTH, NewUrlMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_well_formed};
use axum::http::HeaderValue;
use serde_json::json;
use tracing::{debug, warn};

/// Default number of candidates drawn before giving up on a single `shorten` call.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Service that claims unique short codes and resolves them.
///
/// Uniqueness relies entirely on [`MappingStore::try_insert`] being atomic; the
/// service never checks for a code before claiming it.
pub struct ShortenerService<S: MappingStore + ?Sized, G: CodeGenerator + ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<S: MappingStore + ?Sized, G: CodeGenerator + ?Sized> ShortenerService<S, G> {
    /// Creates a new shortener service.
    ///
    /// `max_attempts` is the number of candidates tried per `shorten` call.
    pub fn new(store: Arc<S>, generator: Arc<G>, max_attempts: usize) -> Self {
        Self {
            store,
            generator,
            max_attempts,
        }
    }

    /// Claims a fresh short code for `long_url` and returns it.
    ///
    /// Draws candidates and attempts an atomic insert for each; a collision discards
    /// the candidate and draws again. Collisions never escape this method.
    ///
    /// The same URL shortened twice gets two distinct codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, longer than
    /// [`MAX_LONG_URL_LENGTH`] characters, or contains bytes a `Location`
    /// header cannot carry (control characters such as `\n` or `\0`).
    ///
    /// Returns [`AppError::ExhaustedRetries`] if every one of `max_attempts`
    /// candidates collided.
    ///
    /// Returns [`AppError::StorageUnavailable`] if the store fails.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        validate_long_url(long_url)?;

        for attempt in 1..=self.max_attempts {
            let code = self.generator.next_candidate();
            let new_mapping = NewUrlMapping::new(code.clone(), long_url);

            if self.store.try_insert(new_mapping).await? {
                debug!(short_code = %code, attempt, "Short code claimed");
                return Ok(code);
            }

            debug!(short_code = %code, attempt, "Short code collision, retrying");
        }

        warn!(
            max_attempts = self.max_attempts,
            "Gave up claiming a short code"
        );

        Err(AppError::exhausted_retries(
            "Failed to generate unique code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Returns the long URL a short code was created for.
    ///
    /// Codes that could never have been issued are answered without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the code.
    /// Returns [`AppError::StorageUnavailable`] if the store fails.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if !is_well_formed(short_code) {
            return Err(not_found(short_code));
        }

        self.store
            .lookup(short_code)
            .await?
            .map(|mapping| mapping.long_url)
            .ok_or_else(|| not_found(short_code))
    }

    /// Total number of stored mappings.
    pub async fn mapping_count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }

    /// Checks if the underlying store is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.store.health_check().await
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": short_code }))
}

/// Rejects URLs that could not be stored or redirected to. Syntax is not inspected.
fn validate_long_url(long_url: &str) -> Result<(), AppError> {
    if long_url.is_empty() {
        return Err(AppError::bad_request("URL must not be empty", json!({})));
    }

    let length = long_url.chars().count();
    if length > MAX_LONG_URL_LENGTH {
        return Err(AppError::bad_request(
            "URL is too long",
            json!({ "length": length, "max_length": MAX_LONG_URL_LENGTH }),
        ));
    }

    if HeaderValue::from_bytes(long_url.as_bytes()).is_err() {
        return Err(AppError::bad_request(
            "URL contains control characters",
            json!({}),
        ));
    }

    Ok(())
}
