//! # shorty
//!
//! A small URL shortener: maps shorthands to target URLs, keeps the mapping in
//! a single SQLite file, and answers `GET /{shorthand}` with a 308 redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - [`domain::entities::Entry`], the repository trait and errors
//! - **Application Layer** ([`application`]) - [`application::services::RegistryService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed repository
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --db ./urls.db --url easy.xyz --port 8000
//!
//! curl -X POST localhost:8000/add -d '{"Shorthand":"foo","Target":"https://bar.local/"}'
//! curl -i localhost:8000/foo   # 308 Permanent Redirect, Location: https://bar.local/
//! ```
//!
//! ## Configuration
//!
//! See [`config::Config`] for flags and their environment variables.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RegistryService;
    pub use crate::domain::RegistryError;
    pub use crate::domain::entities::Entry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::{AppState, Registry};
}
