//! Handler for shorthand redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shorthand to its target URL.
///
/// # Endpoint
///
/// `GET /{shorthand}`
///
/// The whole remaining path is the key, so leading slashes left after routing
/// are stripped by the registry before matching.
///
/// # Errors
///
/// Returns 404 Not Found if the shorthand doesn't exist.
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    Path(shorthand): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.registry.lookup(&shorthand).await?;

    Ok(Redirect::permanent(&target))
}
