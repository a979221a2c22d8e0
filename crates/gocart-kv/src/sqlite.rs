//! # SQLite Backend
//!
//! Durable [`KvStore`] backend over a pooled SQLite connection.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SQLite KV Backend                                  │
//! │                                                                         │
//! │  KvConfig::new(path) ← Configure pool settings                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqliteStore::open(config).await ← Create pool + ensure schema         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐               │  (max_connections)        │
//! │  │  │Conn1│ │Conn2│ │Conn3│ ...           │                           │
//! │  │  └─────┘ └─────┘ └─────┘               │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_entries (key TEXT PRIMARY KEY, value TEXT, updated_at TEXT)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! WAL (Write-Ahead Logging) is enabled so snapshot reads never block the
//! spawned snapshot writes, and vice versa.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use directories::ProjectDirs;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::adapter::KvStore;
use crate::error::{KvError, KvResult};

/// Environment variable overriding the default database location.
const DB_PATH_ENV: &str = "GOCART_DB_PATH";

// =============================================================================
// Configuration
// =============================================================================

/// SQLite backend configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = KvConfig::new("/path/to/gocart.db")
///     .max_connections(5)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (plenty for a single-cart client)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,
}

impl KvConfig {
    /// Creates a new configuration with the given database path.
    /// The file is created on open if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        KvConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let store = SqliteStore::open(KvConfig::in_memory()).await?;
    /// // Store is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        KvConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Creates a configuration pointing at the platform data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.gocart.gocart/gocart.db`
    /// - **Windows**: `%APPDATA%\gocart\gocart\data\gocart.db`
    /// - **Linux**: `~/.local/share/gocart/gocart.db`
    ///
    /// ## Development Override
    /// Set `GOCART_DB_PATH` to use a custom path instead.
    pub fn platform_default() -> KvResult<Self> {
        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            return Ok(KvConfig::new(path));
        }

        let proj_dirs = ProjectDirs::from("com", "gocart", "gocart")
            .ok_or_else(|| KvError::DataDir("no home directory".to_string()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir).map_err(|e| KvError::DataDir(e.to_string()))?;

        Ok(KvConfig::new(data_dir.join("gocart.db")))
    }
}

// =============================================================================
// SQLite Store
// =============================================================================

/// Durable key-value store over SQLite.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens the store: creates the database file if needed, configures
    /// the pool, and ensures the `kv_entries` table exists.
    ///
    /// ## Returns
    /// * `Ok(SqliteStore)` - Ready-to-use store handle
    /// * `Err(KvError)` - Connection or schema bootstrap failed
    pub async fn open(config: KvConfig) -> KvResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening SQLite kv store"
        );

        // sqlite://path with mode=rwc creates the file if not exists
        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| KvError::ConnectionFailed(e.to_string()))?
            // WAL mode: snapshot reads don't block snapshot writes
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: safe from corruption, may lose the very
            // last write on power failure (acceptable for a cart cache)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| KvError::ConnectionFailed(e.to_string()))?;

        let store = SqliteStore { pool };
        store.ensure_schema().await?;

        info!(max_connections = config.max_connections, "SQLite kv store ready");
        Ok(store)
    }

    /// Creates the `kv_entries` table if it doesn't exist. Idempotent, so
    /// it runs on every open instead of a versioned migration set.
    async fn ensure_schema(&self) -> KvResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_entries (
                key        TEXT PRIMARY KEY NOT NULL,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        debug!("kv_entries schema ensured");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KvStore for SqliteStore {
    async fn read(&self, key: &str) -> KvResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| KvError::ReadFailed(e.to_string()))?;

        debug!(key = %key, found = value.is_some(), "kv read");
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> KvResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| KvError::WriteFailed(e.to_string()))?;

        debug!(key = %key, bytes = value.len(), "kv write");
        Ok(())
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| KvError::WriteFailed(e.to_string()))?;

        debug!(key = %key, "kv remove");
        Ok(())
    }
}
