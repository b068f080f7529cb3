//! Record store: append-only `(path, byte count)` log in SQLite
//!
//! Workers only need [`RecordStore::ensure_schema`] and
//! [`RecordStore::insert`]. The read helpers on [`SqliteStore`] exist for
//! inspection and tests; nothing in the pipeline queries the store.
//!
//! All workers share one [`SqliteStore`]. Each insert is a single
//! self-contained statement; concurrency is left to SQLite (WAL journal plus
//! a busy timeout).

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

use crate::{Error, Result};

/// Location string that selects a private in-memory database
pub const MEMORY_LOCATION: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Table definition, executed on every start
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS file_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_path TEXT NOT NULL,
    byte_count INTEGER NOT NULL
);
";

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// One persisted observation of a file
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub file_path: String,
    pub byte_count: i64,
}

/// Append-only sink for file records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the table if it does not exist yet
    async fn ensure_schema(&self) -> Result<()>;

    /// Append one record, returning its id
    async fn insert(&self, file_path: &str, byte_count: i64) -> Result<i64>;
}

/// SQLite-backed record store with connection pooling
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

impl SqliteStore {
    /// Open (creating if needed) the database at `location`
    ///
    /// `location` is a file path or `:memory:`. The parent directory of a
    /// file path must already exist.
    ///
    /// # Errors
    ///
    /// Returns `Error::Execution` if the database cannot be opened
    pub async fn open(location: &str, max_connections: u32) -> Result<Self> {
        let (options, pool_options) = if location == MEMORY_LOCATION {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| Error::database_error(format!("Invalid database location: {e}")))?;
            // Every connection to :memory: is a separate database.
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        } else {
            let options = SqliteConnectOptions::new()
                .filename(location)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(BUSY_TIMEOUT);
            let pool_options = SqlitePoolOptions::new().max_connections(max_connections.max(1));
            (options, pool_options)
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            Error::database_error(format!("Failed to open database '{location}': {e}"))
        })?;

        tracing::debug!(location, "opened record store");
        Ok(Self { pool })
    }

    /// All records for `file_path`, oldest first
    ///
    /// # Errors
    ///
    /// Returns error if the query fails
    pub async fn records_for(&self, file_path: &str) -> Result<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT id, file_path, byte_count FROM file_data WHERE file_path = ? ORDER BY id",
        )
        .bind(file_path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::database_error(format!("Failed to query records: {e}")))
    }

    /// Total number of records
    ///
    /// # Errors
    ///
    /// Returns error if the query fails
    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM file_data")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::database_error(format!("Failed to count records: {e}")))
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| Error::database_error(format!("Failed to create table: {e}")))
    }

    async fn insert(&self, file_path: &str, byte_count: i64) -> Result<i64> {
        sqlx::query("INSERT INTO file_data (file_path, byte_count) VALUES (?, ?)")
            .bind(file_path)
            .bind(byte_count)
            .execute(&self.pool)
            .await
            .map(|result| result.last_insert_rowid())
            .map_err(|e| Error::database_error(format!("Failed to insert record: {e}")))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
