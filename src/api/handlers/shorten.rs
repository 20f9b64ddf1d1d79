//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::{request_origin, short_url};

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3xZ9",
///   "short_url": "https://s.example.com/aB3xZ9",
///   "long_url": "https://example.com/a"
/// }
/// ```
///
/// Every call claims a new code, even for a URL that was shortened before.
///
/// # Errors
///
/// - 400 if the body is not JSON, `url` is missing, its length is out of range,
///   it holds characters a `Location` header cannot carry, or no origin can be
///   determined for the short URL (no `BASE_URL`, `Host` or URI authority)
/// - 503 if the store is unavailable or no free code was found within the retry cap
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let origin = request_origin(state.base_url.as_deref(), &headers, &uri)?;
    let code = state.shortener_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: short_url(&origin, &code),
        code,
        long_url: payload.url,
    }))
}
