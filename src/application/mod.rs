//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::registry_service::RegistryService`] - shorthand lookup and insertion

pub mod services;
