//! Errors raised by registry operations.

use thiserror::Error;

/// Failure of a registry lookup or insert.
///
/// Keys carried by [`RegistryError::NotFound`] are already cleaned of leading
/// slashes.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("could not find the proper URL for {0}")]
    NotFound(String),

    #[error("{0} does already exist")]
    Conflict(String),

    #[error("stored target for {0} is not valid UTF-8")]
    Corrupt(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
