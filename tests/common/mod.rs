#![allow(dead_code)]

use axum_test::TestServer;
use shorty::application::services::RegistryService;
use shorty::domain::entities::Entry;
use shorty::domain::repositories::UrlRepository;
use shorty::infrastructure::persistence::SqliteUrlRepository;
use axum::Router;
use shorty::routes::{app_router, router};
use tower_http::normalize_path::NormalizePath;
use shorty::state::AppState;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_HOST: &str = "easy.xyz";

/// Opens a fresh database file inside a temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
pub async fn open_empty_database() -> (Arc<SqliteUrlRepository>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repository = SqliteUrlRepository::open(dir.path().join("test.db"))
        .await
        .unwrap();

    (Arc::new(repository), dir)
}

/// Opens a fresh database seeded with `test -> https://test.local/`.
pub async fn setup_database() -> (Arc<SqliteUrlRepository>, TempDir) {
    let (repository, dir) = open_empty_database().await;
    repository
        .insert_if_absent(&Entry::new("test", "https://test.local/"))
        .await
        .unwrap();

    (repository, dir)
}

pub fn create_test_state(repository: Arc<SqliteUrlRepository>) -> AppState {
    let registry = Arc::new(RegistryService::new(repository, TEST_HOST));
    AppState::new(registry)
}

pub fn create_test_server(repository: Arc<SqliteUrlRepository>) -> TestServer {
    TestServer::new(router(create_test_state(repository))).unwrap()
}

/// The service `server::run` serves: router behind path normalization.
pub fn create_test_app(repository: Arc<SqliteUrlRepository>) -> NormalizePath<Router> {
    app_router(create_test_state(repository))
}
