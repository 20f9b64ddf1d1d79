//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create a short code for a long URL
/// - `GET  /api/health`  - Storage and cache health
/// - `GET  /{code}`      - Redirect to the long URL
///
/// `/api/health` has two path segments so it can never shadow a short code.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/api/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
