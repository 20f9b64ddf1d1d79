//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the code
/// 2. On miss, resolve through the shortener service
/// 3. Asynchronously populate the cache
/// 4. Return 302 Found with `Location` set to the long URL
///
/// Cache errors are logged and fall back to the store.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 503 Service Unavailable if the store cannot be reached.
/// Returns 500 Internal Server Error if the stored URL cannot be sent as a
/// `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = match state.cache.get_url(&code).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {}", code);
            cached_url
        }
        Ok(None) => {
            debug!("Cache MISS for {}", code);
            let long_url = state.shortener_service.resolve(&code).await?;

            let cache = state.cache.clone();
            let cache_code = code.clone();
            let cache_url = long_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&cache_code, &cache_url, None).await {
                    warn!("Failed to cache URL: {}", e);
                }
            });

            long_url
        }
        Err(e) => {
            warn!("Cache error: {}", e);
            state.shortener_service.resolve(&code).await?
        }
    };

    let location = HeaderValue::try_from(long_url).map_err(|e| {
        error!(short_code = %code, error = %e, "Stored URL is not a valid Location");
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
