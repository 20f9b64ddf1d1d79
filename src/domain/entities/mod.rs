//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code to long URL mapping
//! - [`NewUrlMapping`] - Input for an atomic conditional insert

pub mod url_mapping;

pub use url_mapping::{MAX_LONG_URL_LENGTH, NewUrlMapping, SHORT_CODE_LENGTH, UrlMapping};
