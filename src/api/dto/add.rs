//! DTOs for the add endpoint.
//!
//! Field names are PascalCase on the wire: `{"Shorthand": "...", "Target": "..."}`.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::api::routes::RESERVED_SHORTHANDS;
use crate::domain::entities::Entry;
use crate::error::AppError;

/// Request to register a new shorthand.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddRequest {
    /// The key clients will request.
    #[validate(length(min = 1, max = 512, message = "Shorthand must be 1-512 characters"))]
    pub shorthand: String,

    /// The URL to redirect to. Stored as given once it is a valid header value.
    pub target: String,
}

impl AddRequest {
    /// Converts the request into a domain entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the shorthand could never be
    /// redirected (see [`shorthand_problem`]) or the target cannot be sent in
    /// a `Location` header (see [`target_problem`]).
    pub fn into_entry(self) -> Result<Entry, AppError> {
        if let Some(reason) = shorthand_problem(&self.shorthand) {
            return Err(AppError::bad_request(
                reason,
                json!({ "shorthand": self.shorthand }),
            ));
        }

        if let Some(reason) = target_problem(&self.target) {
            return Err(AppError::bad_request(
                reason,
                json!({ "shorthand": self.shorthand }),
            ));
        }

        Ok(Entry::new(self.shorthand, self.target))
    }
}

/// Explains why `GET /{shorthand}` could never reach `shorthand`, if so.
///
/// - Lookups strip leading slashes, so `/foo` is unreachable.
/// - Trailing slashes are trimmed by path normalization, so `foo/` is unreachable.
/// - `add` and `health` are answered by their own routes.
pub fn shorthand_problem(shorthand: &str) -> Option<&'static str> {
    if shorthand.is_empty() {
        Some("Shorthand must not be empty")
    } else if shorthand.starts_with('/') {
        Some("Shorthand must not start with '/'")
    } else if shorthand.ends_with('/') {
        Some("Shorthand must not end with '/'")
    } else if RESERVED_SHORTHANDS.contains(&shorthand) {
        Some("Shorthand is reserved")
    } else {
        None
    }
}

/// Explains why `target` cannot be used as a redirect location, if so.
///
/// The target is otherwise free-form; only characters forbidden in HTTP
/// header values (control characters such as `\n`) are refused.
pub fn target_problem(target: &str) -> Option<&'static str> {
    if HeaderValue::from_str(target).is_err() {
        Some("Target contains characters not allowed in a Location header")
    } else {
        None
    }
}

/// Response for a successfully registered shorthand.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddResponse {
    pub shorthand: String,
    pub target: String,
    pub short_url: String,
}
