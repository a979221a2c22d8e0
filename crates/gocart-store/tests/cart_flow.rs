//! End-to-end cart flows over both kv backends: hydrate, mutate, settle
//! writes, reopen, and check the stored snapshot round-trips exactly.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gocart_kv::{KvConfig, KvStore, MemoryStore, SqliteStore};
use gocart_store::{CartHandle, CartSlot, CartStore, NewItem, StoreConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn product(id: &str, title: &str, price: f64) -> NewItem {
    NewItem {
        id: id.to_string(),
        title: title.to_string(),
        image_url: format!("https://img.example/{}.png", id),
        price,
    }
}

/// The full merge/eviction lifecycle against a real adapter, finishing
/// with a fresh store hydrating from what the first one persisted.
async fn exercise_cart(adapter: Arc<dyn KvStore>) {
    let store = CartStore::open(adapter.clone(), StoreConfig::default())
        .await
        .unwrap();
    assert!(store.items().is_empty());

    // First add: new line item at quantity 1
    store
        .add_to_cart(product("p1", "Keyboard", 10.0))
        .unwrap()
        .settled()
        .await
        .unwrap();
    assert_eq!(store.items().get("p1").unwrap().quantity, 1);

    // Same product again: merged, not duplicated
    store
        .add_to_cart(product("p1", "Keyboard", 10.0))
        .unwrap()
        .settled()
        .await
        .unwrap();
    let cart = store.items();
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.get("p1").unwrap().quantity, 2);

    // Second product, then bump it via increment
    store
        .add_to_cart(product("p2", "Mouse", 4.5))
        .unwrap()
        .settled()
        .await
        .unwrap();
    store.increment("p2").settled().await.unwrap();
    assert_eq!(store.items().get("p2").unwrap().quantity, 2);

    // Decrement p1 down to eviction
    store.decrement("p1").settled().await.unwrap();
    assert_eq!(store.items().get("p1").unwrap().quantity, 1);
    store.decrement("p1").settled().await.unwrap();
    assert!(store.items().get("p1").is_none());

    // Mutations on absent ids are silent no-ops
    store.increment("missing").settled().await.unwrap();
    store.decrement("p1").settled().await.unwrap();

    // A fresh store hydrates exactly what the first one left behind
    let reopened = CartStore::open(adapter, StoreConfig::default())
        .await
        .unwrap();
    assert_eq!(reopened.items(), store.items());
    assert_eq!(reopened.items().get("p2").unwrap().quantity, 2);
}

#[tokio::test]
async fn test_cart_flow_over_memory_backend() {
    init_tracing();
    exercise_cart(Arc::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn test_cart_flow_over_sqlite_backend() {
    init_tracing();
    let adapter = SqliteStore::open(KvConfig::in_memory()).await.unwrap();
    exercise_cart(Arc::new(adapter)).await;
}

#[tokio::test]
async fn test_order_survives_round_trip() {
    init_tracing();
    let adapter: Arc<dyn KvStore> =
        Arc::new(SqliteStore::open(KvConfig::in_memory()).await.unwrap());

    let store = CartStore::open(adapter.clone(), StoreConfig::default())
        .await
        .unwrap();
    for item in [
        product("p3", "Cable", 2.0),
        product("p1", "Keyboard", 10.0),
        product("p1", "Keyboard", 10.0),
        product("p2", "Mouse", 4.5),
    ] {
        store.add_to_cart(item).unwrap().settled().await.unwrap();
    }

    let reopened = CartStore::open(adapter, StoreConfig::default())
        .await
        .unwrap();
    let cart = reopened.items();

    let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
    let quantities: Vec<u32> = cart.items().iter().map(|i| i.quantity).collect();
    assert_eq!(ids, vec!["p3", "p1", "p2"]);
    assert_eq!(quantities, vec![1, 2, 1]);
}

#[tokio::test]
async fn test_slot_wiring_end_to_end() {
    init_tracing();
    let store = CartStore::open(Arc::new(MemoryStore::new()), StoreConfig::default())
        .await
        .unwrap();

    let slot = CartSlot::new();
    slot.provide(CartHandle::new(store)).unwrap();

    let cart = slot.cart().unwrap();
    let mut changes = cart.subscribe();

    cart.add_to_cart(product("p1", "Keyboard", 10.0))
        .unwrap()
        .settled()
        .await
        .unwrap();

    changes.changed().await.unwrap();
    assert_eq!(changes.borrow().item_count(), 1);
    assert_eq!(cart.totals().subtotal, 10.0);
}
