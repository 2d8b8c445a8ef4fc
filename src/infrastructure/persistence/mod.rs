//! SQLite repository implementation.
//!
//! Concrete implementation of [`crate::domain::repositories::UrlRepository`]
//! over a single database file.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
