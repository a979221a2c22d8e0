//! # Storage Adapter Contract
//!
//! The async key-value interface the cart state machine persists through.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KvStore Contract                                   │
//! │                                                                         │
//! │  read(key)          ──► Ok(Some(value))   key present                   │
//! │                     ──► Ok(None)          key absent (NOT an error)     │
//! │                     ──► Err(KvError)      engine failure                │
//! │                                                                         │
//! │  write(key, value)  ──► full-value overwrite, atomic per key            │
//! │                                                                         │
//! │  remove(key)        ──► idempotent; removing an absent key is Ok        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are strings: the cart layer serializes whole snapshots to JSON
//! before they reach this seam, so the storage engine never needs to
//! understand cart structure.

use async_trait::async_trait;

use crate::error::KvResult;

/// Opaque asynchronous key-value store.
///
/// Implementations must be cheap to share (`Send + Sync`); the cart state
/// machine holds its store as `Arc<dyn KvStore>` and issues writes from
/// spawned tasks.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// A missing key is `Ok(None)`, never an error.
    async fn read(&self, key: &str) -> KvResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value in full.
    async fn write(&self, key: &str, value: &str) -> KvResult<()>;

    /// Removes the value stored under `key`. Idempotent.
    async fn remove(&self, key: &str) -> KvResult<()>;
}
