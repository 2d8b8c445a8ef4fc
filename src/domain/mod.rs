//! Domain layer containing the registry entity and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Entry`] and key normalization
//! - [`repositories`] - [`repositories::UrlRepository`], implemented by the
//!   infrastructure layer
//! - [`error`] - [`error::RegistryError`], the failure modes of lookup and insert
//!
//! The domain layer has no dependency on HTTP or on a concrete store.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::RegistryError;
