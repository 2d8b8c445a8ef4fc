use std::sync::Arc;

use crate::application::services::RegistryService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Registry service backed by the SQLite store.
pub type Registry = RegistryService<SqliteUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}
