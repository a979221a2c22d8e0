//! # Access Facade
//!
//! What the presentation layer holds: a cheap-to-clone [`CartHandle`]
//! over the store, and a [`CartSlot`] that makes wiring mistakes loud.
//!
//! ## Composition Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Facade Composition                                   │
//! │                                                                         │
//! │  async fn compose() -> CartResult<()> {                                 │
//! │      let adapter = Arc::new(SqliteStore::open(config).await?);          │
//! │      let store = CartStore::open(adapter, StoreConfig::default())       │
//! │          .await?;                                                       │
//! │                                                                         │
//! │      let slot = CartSlot::new();                                        │
//! │      slot.provide(CartHandle::new(store))?;   // once, at startup       │
//! │                                                                         │
//! │      // slot passed by reference to whichever components need it        │
//! │      let cart = slot.cart()?;                 // loud if never provided │
//! │      cart.add_to_cart(item)?;                                           │
//! │      Ok(())                                                             │
//! │  }                                                                      │
//! │                                                                         │
//! │  NO ambient global: the slot travels through composition, so a          │
//! │  component reaching for a cart that was never wired fails with          │
//! │  CartError::Unconfigured instead of crashing on missing state.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio::sync::watch;

use gocart_core::{Cart, CartTotals, NewItem};

use crate::error::{CartError, CartResult};
use crate::store::{CartStore, WriteTicket};

// =============================================================================
// Cart Handle
// =============================================================================

/// Clonable facade over a [`CartStore`].
///
/// Clones share the one underlying store; consumers get read snapshots
/// and mutations, never a mutable alias of the cart itself.
#[derive(Clone)]
pub struct CartHandle {
    inner: Arc<CartStore>,
}

impl CartHandle {
    /// Wraps a store in a shareable handle.
    pub fn new(store: CartStore) -> Self {
        CartHandle {
            inner: Arc::new(store),
        }
    }

    /// Owned snapshot of the current cart.
    pub fn items(&self) -> Cart {
        self.inner.items()
    }

    /// Derived totals for the current cart.
    pub fn totals(&self) -> CartTotals {
        self.inner.totals()
    }

    /// Adds a product to the cart. See [`CartStore::add_to_cart`].
    pub fn add_to_cart(&self, item: NewItem) -> CartResult<WriteTicket> {
        self.inner.add_to_cart(item)
    }

    /// Increments a line item's quantity. See [`CartStore::increment`].
    pub fn increment(&self, id: &str) -> WriteTicket {
        self.inner.increment(id)
    }

    /// Decrements a line item's quantity. See [`CartStore::decrement`].
    pub fn decrement(&self, id: &str) -> WriteTicket {
        self.inner.decrement(id)
    }

    /// Subscribes to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.subscribe()
    }
}

impl fmt::Debug for CartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

// =============================================================================
// Cart Slot
// =============================================================================

/// Set-once provider slot for a [`CartHandle`].
///
/// The explicit replacement for an ambient global: the slot is created
/// at composition time, provided exactly once, and passed by reference
/// to components. Reading an unprovided slot is a configuration error,
/// not an empty cart.
#[derive(Debug, Default)]
pub struct CartSlot {
    inner: OnceLock<CartHandle>,
}

impl CartSlot {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        CartSlot {
            inner: OnceLock::new(),
        }
    }

    /// Provides the handle. Set-once: a second call is a configuration
    /// error ([`CartError::AlreadyProvided`]).
    pub fn provide(&self, handle: CartHandle) -> CartResult<()> {
        self.inner
            .set(handle)
            .map_err(|_| CartError::AlreadyProvided)
    }

    /// Returns the provided handle, or [`CartError::Unconfigured`] if
    /// the slot was never provided. Surface this error immediately; it
    /// is a wiring mistake, not a retryable condition.
    pub fn cart(&self) -> CartResult<&CartHandle> {
        self.inner.get().ok_or(CartError::Unconfigured)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use gocart_kv::MemoryStore;

    use crate::config::StoreConfig;

    use super::*;

    fn candidate(id: &str) -> NewItem {
        NewItem {
            id: id.to_string(),
            title: "T".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
        }
    }

    async fn open_handle() -> CartHandle {
        let store = CartStore::open(Arc::new(MemoryStore::new()), StoreConfig::default())
            .await
            .unwrap();
        CartHandle::new(store)
    }

    #[tokio::test]
    async fn test_unprovided_slot_is_a_configuration_error() {
        let slot = CartSlot::new();

        let err = slot.cart().unwrap_err();
        assert!(matches!(err, CartError::Unconfigured));
    }

    #[tokio::test]
    async fn test_provided_slot_returns_handle() {
        let slot = CartSlot::new();
        slot.provide(open_handle().await).unwrap();

        let cart = slot.cart().unwrap();
        assert!(cart.items().is_empty());
    }

    #[tokio::test]
    async fn test_double_provide_is_a_configuration_error() {
        let slot = CartSlot::new();
        slot.provide(open_handle().await).unwrap();

        let err = slot.provide(open_handle().await).unwrap_err();
        assert!(matches!(err, CartError::AlreadyProvided));
    }

    #[tokio::test]
    async fn test_clones_share_one_cart() {
        let handle = open_handle().await;
        let twin = handle.clone();

        handle
            .add_to_cart(candidate("p1"))
            .unwrap()
            .settled()
            .await
            .unwrap();

        assert_eq!(twin.items().get("p1").unwrap().quantity, 1);
    }
}
