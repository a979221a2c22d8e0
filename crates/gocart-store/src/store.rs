//! # Cart Store
//!
//! The cart state machine: hydration at open, synchronous in-memory
//! mutation, asynchronous snapshot persistence.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutation Flow                                   │
//! │                                                                         │
//! │  caller                      CartStore                   KvStore       │
//! │  ──────                      ─────────                   ───────       │
//! │                                                                         │
//! │  add_to_cart(item) ────────► validate input                             │
//! │                              mutate cart in watch channel               │
//! │                              │  (synchronous, serialized,               │
//! │                              │   notifies only on change)               │
//! │                              clone snapshot                             │
//! │                              spawn ──────────────────────► write(key,   │
//! │  ◄──────────── WriteTicket ──┘                             full JSON)   │
//! │                                                                         │
//! │  ticket dropped      → fire-and-forget (original behavior)             │
//! │  ticket.settled().await → durability outcome for this mutation         │
//! │                                                                         │
//! │  ORDERING: memory effects are serialized in call order; snapshot        │
//! │  writes are issued in the same order but may complete out of order.     │
//! │  Accepted: each write is the full cart under a single key, so the       │
//! │  last write wins.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use gocart_core::{Cart, CartTotals, LineItem, NewItem};
use gocart_kv::KvStore;

use crate::config::StoreConfig;
use crate::error::{CartError, CartResult};

// =============================================================================
// Write Ticket
// =============================================================================

/// Tracks one spawned snapshot write.
///
/// The in-memory mutation has already taken effect by the time a ticket
/// exists. Dropping the ticket detaches the write (fire-and-forget);
/// [`WriteTicket::settled`] awaits the durability outcome for callers
/// that need write ordering guarantees.
#[derive(Debug)]
pub struct WriteTicket {
    handle: JoinHandle<CartResult<()>>,
}

impl WriteTicket {
    /// Waits for the snapshot write to finish and returns its outcome.
    ///
    /// A write failure does not roll anything back: memory stays the
    /// session's source of truth and the next successful write repairs
    /// the stored snapshot.
    pub async fn settled(self) -> CartResult<()> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(err) => Err(CartError::PersistAborted(err.to_string())),
        }
    }

    /// Explicit fire-and-forget. Dropping the ticket does the same; this
    /// just states the intent at the call site.
    pub fn detach(self) {}
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart state machine.
///
/// Owns the authoritative in-memory [`Cart`] and is the only writer of
/// the persisted snapshot. The cart lives inside a `tokio::sync::watch`
/// channel: the sender's internal lock serializes mutations, and
/// subscribers get change notifications from the same primitive.
///
/// ## States
/// There is no "uninitialized" state to misuse: [`CartStore::open`]
/// completes hydration before a store value exists, so every reachable
/// store is ready.
pub struct CartStore {
    /// Storage adapter. Shared with spawned write tasks.
    adapter: Arc<dyn KvStore>,

    /// Fully-qualified snapshot key (`<namespace>:Products`).
    key: String,

    /// Authoritative cart + change notification.
    state: watch::Sender<Cart>,
}

impl CartStore {
    /// Opens the store: reads the persisted snapshot, hydrates memory,
    /// and returns a ready store. Runs exactly once per store lifetime,
    /// before any mutation is possible.
    ///
    /// ## Behavior
    /// - Absent snapshot → empty cart
    /// - Present snapshot → JSON-decode, then re-validate the cart
    ///   invariants (unique ids, quantities >= 1)
    ///
    /// ## Errors
    /// - [`CartError::Storage`] if the adapter read fails
    /// - [`CartError::SnapshotCorrupt`] if the snapshot doesn't parse or
    ///   violates invariants. Never silently replaced with an empty
    ///   cart; the stored bytes are left in place
    pub async fn open(adapter: Arc<dyn KvStore>, config: StoreConfig) -> CartResult<Self> {
        let key = config.storage_key();

        let cart = match adapter.read(&key).await? {
            None => {
                debug!(key = %key, "No persisted snapshot; starting empty");
                Cart::new()
            }
            Some(raw) => {
                let items: Vec<LineItem> = serde_json::from_str(&raw)
                    .map_err(|e| CartError::SnapshotCorrupt(e.to_string()))?;
                Cart::from_items(items).map_err(|e| CartError::SnapshotCorrupt(e.to_string()))?
            }
        };

        info!(key = %key, items = cart.item_count(), "Cart hydrated");

        let (state, _) = watch::channel(cart);
        Ok(CartStore {
            adapter,
            key,
            state,
        })
    }

    /// Adds a product to the cart, merging by product id.
    ///
    /// If the id is already present the existing entry's quantity grows
    /// by 1 and keeps its position; otherwise the item is appended with
    /// quantity 1. The full updated cart is then persisted asynchronously.
    ///
    /// ## Errors
    /// [`CartError::Validation`] if the candidate has an empty id; the
    /// cart is untouched and nothing is persisted.
    ///
    /// ## Panics
    /// Must be called within a Tokio runtime (the snapshot write is
    /// spawned).
    pub fn add_to_cart(&self, item: NewItem) -> CartResult<WriteTicket> {
        item.validate()?;
        debug!(id = %item.id, "add_to_cart");

        self.state.send_if_modified(|cart| cart.add_item(item));
        Ok(self.persist())
    }

    /// Increments the quantity of the item with the given id.
    ///
    /// A missing id is a silent no-op (add_to_cart is the creation path),
    /// but the snapshot is still re-persisted. Subscribers are only
    /// notified when the cart actually changed.
    ///
    /// ## Panics
    /// Must be called within a Tokio runtime.
    pub fn increment(&self, id: &str) -> WriteTicket {
        let matched = self.state.send_if_modified(|cart| cart.increment(id));
        debug!(id = %id, matched = matched, "increment");
        self.persist()
    }

    /// Decrements the quantity of the item with the given id, evicting
    /// the item when its quantity would reach 0.
    ///
    /// A missing id is a silent no-op. The snapshot is re-persisted
    /// regardless of whether an eviction occurred.
    ///
    /// ## Panics
    /// Must be called within a Tokio runtime.
    pub fn decrement(&self, id: &str) -> WriteTicket {
        let matched = self.state.send_if_modified(|cart| cart.decrement(id));
        debug!(id = %id, matched = matched, "decrement");
        self.persist()
    }

    /// Owned snapshot of the current cart: one consistent value per
    /// render/consumption cycle.
    pub fn items(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Derived totals for the current cart.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.state.borrow())
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver is the explicit observer seam: it yields a
    /// notification whenever a mutation changed the cart, and none for
    /// no-op mutations.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Spawns the snapshot write for the current cart state.
    ///
    /// The snapshot is cloned synchronously here, so the payload reflects
    /// this mutation even if later mutations land before the write runs.
    fn persist(&self) -> WriteTicket {
        let snapshot = self.state.borrow().clone();
        let adapter = Arc::clone(&self.adapter);
        let key = self.key.clone();

        let handle = tokio::spawn(async move {
            let payload = serde_json::to_string(&snapshot)
                .map_err(|e| CartError::SnapshotEncode(e.to_string()))?;

            match adapter.write(&key, &payload).await {
                Ok(()) => {
                    debug!(key = %key, items = snapshot.item_count(), "Cart snapshot persisted");
                    Ok(())
                }
                Err(err) => {
                    // At-most-once attempt; memory stays the source of truth.
                    error!(key = %key, error = %err, "Cart snapshot write failed");
                    Err(CartError::Storage(err))
                }
            }
        });

        WriteTicket { handle }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.state.borrow().item_count();
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("items", &items)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
