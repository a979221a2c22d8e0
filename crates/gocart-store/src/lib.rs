//! # gocart-store: Cart State Machine and Access Facade
//!
//! Keeps the in-memory cart and its persisted snapshot consistent.
//!
//! ## Module Organization
//! ```text
//! gocart_store/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── store.rs    ◄─── CartStore state machine + WriteTicket
//! ├── handle.rs   ◄─── CartHandle facade + CartSlot provider
//! ├── config.rs   ◄─── Namespace / storage key configuration
//! └── error.rs    ◄─── CartError for facade consumers
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Lifecycle                               │
//! │                                                                         │
//! │  1. Open ─────────────────────────────────────────────────────────────► │
//! │     • CartStore::open(adapter, config).await                            │
//! │     • Reads the snapshot key, decodes, re-validates invariants          │
//! │     • Corrupt snapshot → fatal open error (never silently empty)        │
//! │                                                                         │
//! │  2. Mutate ───────────────────────────────────────────────────────────► │
//! │     • add_to_cart / increment / decrement                               │
//! │     • Memory updated synchronously, subscribers notified on change      │
//! │     • Full snapshot write spawned; WriteTicket reports the outcome      │
//! │                                                                         │
//! │  3. Consume ──────────────────────────────────────────────────────────► │
//! │     • CartSlot::provide(handle) once at composition time                │
//! │     • Components call slot.cart()?, read items(), subscribe()           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod handle;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{CartError, CartResult};
pub use handle::{CartHandle, CartSlot};
pub use store::{CartStore, WriteTicket};

// Domain types, re-exported so facade consumers need a single dependency
pub use gocart_core::{Cart, CartTotals, LineItem, NewItem};
