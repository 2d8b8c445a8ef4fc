//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{shorthand}` - Redirect (public)
//! - `POST /add`         - Register a shorthand
//! - `GET  /health`      - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state and tracing applied.
pub fn router(state: AppState) -> Router {
    api::routes::registry_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
