//! Short URL construction for API responses.
//!
//! The core only ever returns bare codes. The transport prefixes them with either
//! the configured `BASE_URL` or, when none is set, the origin the client used.
//! The origin is resolved before a code is claimed, so a request that cannot be
//! answered with a short URL never creates a mapping.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

/// Resolves the origin short URLs are built on.
///
/// Uses `base_url` when configured. Otherwise takes `http://{Host}` from the
/// request, falling back to the request URI authority (HTTP/2 `:authority`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the request
/// carries neither a usable `Host` header nor a URI authority.
///
/// # Examples
///
/// ```ignore
/// let origin = request_origin(Some("https://s.example.com/"), &HeaderMap::new(), &uri)?;
/// assert_eq!(short_url(&origin, "aB3xZ9"), "https://s.example.com/aB3xZ9");
/// ```
pub fn request_origin(
    base_url: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = host_header(headers)
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?;

    Ok(format!("http://{}", host))
}

/// Joins an origin from [`request_origin`] and a short code.
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}/{}", origin, code)
}

/// Raw `Host` header, port included. Absent, empty or non-UTF-8 values are ignored.
fn host_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
}
