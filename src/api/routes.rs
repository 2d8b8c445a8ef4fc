//! API route configuration.

use crate::api::handlers::{add_handler, health_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shorthands answered by static routes instead of the redirect route.
pub const RESERVED_SHORTHANDS: &[&str] = &["add", "health"];

/// All registry routes.
///
/// # Endpoints
///
/// - `POST /add`          - Register a shorthand
/// - `GET  /health`       - Store health check
/// - `GET  /{shorthand}`  - Redirect to the target (308)
///
/// `add` and `health` take precedence over the catch-all redirect route, so
/// they are listed in [`RESERVED_SHORTHANDS`].
pub fn registry_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_handler))
        .route("/health", get(health_handler))
        .route("/{*shorthand}", get(redirect_handler))
}
