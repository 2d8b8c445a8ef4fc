//! URL registry service: lookup and insert-if-absent.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::RegistryError;
use crate::domain::entities::{Entry, clean_key};
use crate::domain::repositories::UrlRepository;

/// Service owning the shorthand to target mapping.
///
/// The store handle is injected; nothing here holds global state.
pub struct RegistryService<R: UrlRepository> {
    repository: Arc<R>,
    host: String,
}

impl<R: UrlRepository> RegistryService<R> {
    /// Creates a new registry service.
    ///
    /// `host` is the public host name used to build short URLs.
    pub fn new(repository: Arc<R>, host: impl Into<String>) -> Self {
        Self {
            repository,
            host: host.into(),
        }
    }

    /// Resolves a requested key to its target URL.
    ///
    /// Leading slashes are stripped from `key` before matching.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] carrying the cleaned key on a miss.
    /// Returns [`RegistryError::Storage`] on database errors.
    pub async fn lookup(&self, key: &str) -> Result<String, RegistryError> {
        let key = clean_key(key);

        match self.repository.find(key).await? {
            Some(target) => {
                debug!(shorthand = %key, "Registry hit");
                Ok(target)
            }
            None => {
                debug!(shorthand = %key, "Registry miss");
                Err(RegistryError::NotFound(key.to_string()))
            }
        }
    }

    /// Adds `entry` to the registry unless its shorthand is taken.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] if the shorthand already exists; the
    /// stored target is left untouched.
    /// Returns [`RegistryError::Storage`] on database errors.
    pub async fn insert(&self, entry: Entry) -> Result<Entry, RegistryError> {
        match self.repository.insert_if_absent(&entry).await {
            Ok(()) => {
                info!(shorthand = %entry.shorthand, target = %entry.target, "Entry added");
                Ok(entry)
            }
            Err(RegistryError::Conflict(key)) => {
                warn!(shorthand = %key, "Shorthand already taken");
                Err(RegistryError::Conflict(key))
            }
            Err(e) => Err(e),
        }
    }

    /// Builds the public short URL for a shorthand.
    ///
    /// Always uses HTTPS protocol.
    pub fn short_url(&self, shorthand: &str) -> String {
        format!("https://{}/{}", self.host.trim_end_matches('/'), shorthand)
    }

    /// Returns true if the store answers queries.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}
