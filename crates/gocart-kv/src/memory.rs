//! # In-Memory Backend
//!
//! HashMap-backed [`KvStore`] for tests and ephemeral sessions. Nothing
//! survives the process; use [`crate::SqliteStore`] for durability.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::adapter::KvStore;
use crate::error::KvResult;

/// In-memory key-value store.
///
/// Entries live behind an `RwLock`; no await point ever holds the lock, so
/// the synchronous guard is safe inside the async trait methods.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stored keys. Test helper.
    pub fn len(&self) -> usize {
        self.entries.read().expect("kv store lock poisoned").len()
    }

    /// Checks if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn read(&self, key: &str) -> KvResult<Option<String>> {
        let entries = self.entries.read().expect("kv store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> KvResult<()> {
        let mut entries = self.entries.write().expect("kv store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        let mut entries = self.entries.write().expect("kv store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let store = MemoryStore::new();

        store.write("k", "v1").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v1"));
    }

    #[tokio::test]
    async fn test_write_overwrites_in_full() {
        let store = MemoryStore::new();

        store.write("k", "v1").await.unwrap();
        store.write("k", "v2").await.unwrap();

        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();

        store.write("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();

        assert_eq!(store.read("k").await.unwrap(), None);
    }
}
