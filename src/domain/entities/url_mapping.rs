//! UrlMapping entity: the only persisted record.

use chrono::{DateTime, Utc};

/// Number of characters in every short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Maximum number of characters accepted for a long URL.
pub const MAX_LONG_URL_LENGTH: usize = 2048;

/// A short code mapped to the URL it was created for.
///
/// Mappings are created once and never mutated. `id` is assigned by the store
/// and carries no meaning beyond identifying the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for claiming a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub long_url: String,
}

impl NewUrlMapping {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
