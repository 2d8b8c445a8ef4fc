//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementation

pub mod persistence;
