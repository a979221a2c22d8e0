//! # gocart-kv: Key-Value Persistence Layer for GoCart
//!
//! This crate provides the storage seam the cart state machine writes
//! through. The contract is a small async key-value interface; everything
//! above it treats storage as an opaque collaborator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GoCart Data Flow                                │
//! │                                                                         │
//! │  CartStore (gocart-store)                                              │
//! │       │  read("gocart:Products") / write("gocart:Products", json)      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     gocart-kv (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    KvStore    │    │  SqliteStore  │    │ MemoryStore  │  │   │
//! │  │   │  (adapter.rs) │◄───│  (sqlite.rs)  │    │ (memory.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ read / write  │    │ SqlitePool    │    │ HashMap      │  │   │
//! │  │   │ / remove      │    │ kv_entries    │    │ behind lock  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: ~/.local/share/gocart/gocart.db (platform-specific)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`adapter`] - The `KvStore` trait (the contract everything codes to)
//! - [`sqlite`] - Durable SQLite backend with connection pooling
//! - [`memory`] - In-memory backend for tests and ephemeral sessions
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gocart_kv::{KvConfig, KvStore, SqliteStore};
//!
//! let store = SqliteStore::open(KvConfig::new("path/to/gocart.db")).await?;
//! store.write("gocart:Products", "[]").await?;
//! let raw = store.read("gocart:Products").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adapter;
pub mod error;
pub mod memory;
pub mod sqlite;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapter::KvStore;
pub use error::{KvError, KvResult};
pub use memory::MemoryStore;
pub use sqlite::{KvConfig, SqliteStore};
