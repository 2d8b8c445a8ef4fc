//! Repository trait for the shorthand to target mapping.

use crate::domain::entities::Entry;
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Storage contract for the URL registry.
///
/// Keys passed to this trait are already cleaned; normalization happens in
/// [`crate::application::services::RegistryService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - single-file SQLite store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the target stored for `shorthand`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on database errors and
    /// [`RegistryError::Corrupt`] if the stored bytes are not UTF-8.
    async fn find(&self, shorthand: &str) -> Result<Option<String>, RegistryError>;

    /// Writes `entry` unless its shorthand is already taken.
    ///
    /// The existence check and the write run inside a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] if the shorthand already exists.
    /// Returns [`RegistryError::Storage`] on database errors.
    async fn insert_if_absent(&self, entry: &Entry) -> Result<(), RegistryError>;

    /// Runs a trivial query against the store.
    async fn ping(&self) -> Result<(), RegistryError>;
}
