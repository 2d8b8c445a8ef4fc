//! Handler for shorthand registration.

use axum::{Json, body::Bytes, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::add::{AddRequest, AddResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new shorthand.
///
/// # Endpoint
///
/// `POST /add`
///
/// # Request Body
///
/// ```json
/// { "Shorthand": "foo", "Target": "https://bar.local/" }
/// ```
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// # Response
///
/// ```json
/// {
///   "Shorthand": "foo",
///   "Target": "https://bar.local/",
///   "ShortUrl": "https://easy.xyz/foo"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a valid request.
/// Returns 409 Conflict if the shorthand already exists.
/// Returns 500 Internal Server Error if the store fails.
pub async fn add_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AddResponse>, AppError> {
    let payload: AddRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request("Malformed request body", json!({ "reason": e.to_string() }))
    })?;
    payload.validate()?;

    let entry = state.registry.insert(payload.into_entry()?).await?;
    let short_url = state.registry.short_url(&entry.shorthand);

    Ok(Json(AddResponse {
        shorthand: entry.shorthand,
        target: entry.target,
        short_url,
    }))
}
