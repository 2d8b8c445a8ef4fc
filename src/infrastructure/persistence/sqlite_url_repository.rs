//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Entry;
use crate::domain::error::RegistryError;
use crate::domain::repositories::UrlRepository;

/// Schema of the single `urls` table. Keys and targets are raw byte strings.
const CREATE_URLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    shorthand BLOB PRIMARY KEY NOT NULL,
    target    BLOB NOT NULL
)
"#;

const MAX_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// File-backed registry store.
///
/// One database file holds one `urls` table. Readers run concurrently under
/// the WAL journal; writers are serialized by SQLite's write lock.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file at `path` and makes sure
    /// the `urls` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the file cannot be opened or the
    /// schema cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.ensure_schema().await?;

        Ok(repository)
    }

    /// Creates the `urls` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RegistryError> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection, flushing the WAL into the database file.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn find(&self, shorthand: &str) -> Result<Option<String>, RegistryError> {
        let row = sqlx::query_scalar::<_, Vec<u8>>("SELECT target FROM urls WHERE shorthand = ?")
            .bind(shorthand.as_bytes())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|bytes| {
            String::from_utf8(bytes).map_err(|_| RegistryError::Corrupt(shorthand.to_string()))
        })
        .transpose()
    }

    async fn insert_if_absent(&self, entry: &Entry) -> Result<(), RegistryError> {
        let mut tx = self.pool.begin().await?;

        // Existence check and write in one statement: the transaction never
        // reads before it writes.
        let result = sqlx::query(
            "INSERT INTO urls (shorthand, target) VALUES (?, ?) ON CONFLICT (shorthand) DO NOTHING",
        )
        .bind(entry.shorthand.as_bytes())
        .bind(entry.target.as_bytes())
        .execute(&mut *tx)
        .await?;

        // Dropping `tx` rolls the transaction back.
        if result.rows_affected() == 0 {
            return Err(RegistryError::Conflict(entry.shorthand.clone()));
        }

        tx.commit().await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
