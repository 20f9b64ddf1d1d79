//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code creation and resolution

pub mod services;
