//! Utility functions for code generation and response building.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`short_url`] - Client-facing short URL construction

pub mod code_generator;
pub mod short_url;
