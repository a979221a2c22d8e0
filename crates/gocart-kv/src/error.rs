//! # Storage Error Types
//!
//! Error types for key-value storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KvError (this module) ← Adds operation context                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError (gocart-store) ← What facade consumers see                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Key-value storage operation errors.
#[derive(Debug, Error)]
pub enum KvError {
    /// Store could not be opened.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A read failed. A missing key is NOT an error (reads return
    /// `Ok(None)`); this is a transport/engine failure.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// A write failed. The caller's in-memory state is unaffected.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Platform data directory could not be resolved or created.
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage engine error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to KvError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → KvError::PoolExhausted
/// sqlx::Error::PoolClosed     → KvError::ConnectionFailed
/// Other                       → KvError::Internal
/// ```
impl From<sqlx::Error> for KvError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => KvError::PoolExhausted,
            sqlx::Error::PoolClosed => KvError::ConnectionFailed("pool is closed".to_string()),
            _ => KvError::Internal(err.to_string()),
        }
    }
}

/// Result type for storage operations.
pub type KvResult<T> = Result<T, KvError>;
