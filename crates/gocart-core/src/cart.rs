//! # Cart Domain
//!
//! Line items, the cart collection, and the merge/eviction rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Mutation Rules                                │
//! │                                                                         │
//! │  Operation            Id in cart?           Effect                      │
//! │  ─────────            ───────────           ──────                      │
//! │                                                                         │
//! │  add_item(item) ─────► yes ───────────────► quantity += 1 (in place)   │
//! │                  └───► no ────────────────► push item with quantity 1  │
//! │                                                                         │
//! │  increment(id) ──────► yes ───────────────► quantity += 1              │
//! │                  └───► no ────────────────► no-op                      │
//! │                                                                         │
//! │  decrement(id) ──────► yes, quantity > 1 ─► quantity -= 1              │
//! │                  ├───► yes, quantity == 1 ► item evicted               │
//! │                  └───► no ────────────────► no-op                      │
//! │                                                                         │
//! │  NOTE: Every mutation reports whether it changed the cart, so the      │
//! │        state machine can suppress notifications for no-ops.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart with an aggregated quantity.
///
/// ## Field Names Are Wire Format
/// The persisted snapshot is a JSON array of this struct, so the field
/// names below (`image_url` in particular) are load-bearing: snapshots
/// written by earlier versions of the app must keep hydrating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Opaque product identity minted by the upstream catalog.
    /// Unique within a cart.
    pub id: String,

    /// Display title at time of adding.
    pub title: String,

    /// Product image URL for the cart screen.
    pub image_url: String,

    /// Unit price, currency-agnostic display value.
    pub price: f64,

    /// Aggregated quantity. Always >= 1 for an item present in a cart.
    pub quantity: u32,
}

/// An add candidate: a product the user picked, before it carries a
/// quantity. Becomes a [`LineItem`] with quantity 1 on first add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewItem {
    /// Opaque product identity. Must be non-empty.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Product image URL.
    pub image_url: String,

    /// Unit price.
    pub price: f64,
}

impl NewItem {
    /// Checks the input constraints for an add candidate.
    ///
    /// The only constraint is a non-empty `id`; everything else is opaque
    /// display data owned by the upstream catalog.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.id.is_empty() {
            return Err(ValidationError::Required {
                field: "id".to_string(),
            });
        }
        Ok(())
    }
}

impl From<NewItem> for LineItem {
    /// Builds the initial line item for a first add (quantity 1).
    fn from(item: NewItem) -> Self {
        LineItem {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of line items.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product merges quantities)
/// - Quantity is >= 1 for every present item; a decrement that would reach
///   0 evicts the item instead
/// - Insertion order is preserved; in-place quantity changes never move an
///   entry
///
/// The item list is private so the invariants cannot be broken from the
/// outside; read access goes through [`Cart::items`].
///
/// Serializes transparently as a JSON array of [`LineItem`] (the snapshot
/// wire format). Deserialization goes through [`Cart::from_items`] so
/// stored snapshots are re-validated on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from deserialized snapshot items, re-checking the
    /// invariants.
    ///
    /// ## Errors
    /// - [`ValidationError::Duplicate`] if two items share an id
    /// - [`ValidationError::MustBePositive`] if an item has quantity 0
    ///
    /// A stored snapshot violating either invariant was not written by
    /// this state machine and is treated as corrupt by the caller.
    pub fn from_items(items: Vec<LineItem>) -> ValidationResult<Self> {
        for (index, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidationError::MustBePositive {
                    field: "quantity".to_string(),
                });
            }
            if items[..index].iter().any(|earlier| earlier.id == item.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                });
            }
        }
        Ok(Cart { items })
    }

    /// Adds a product to the cart, merging by product id.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity increases by
    ///   1 and the entry keeps its position
    /// - If not: a new line item with quantity 1 is appended
    ///
    /// Returns `true` (the cart always changes); the uniform `bool` return
    /// lets the state machine drive all three mutations through the same
    /// changed-check.
    pub fn add_item(&mut self, item: NewItem) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
            return true;
        }
        self.items.push(LineItem::from(item));
        true
    }

    /// Increments the quantity of the item with the given id.
    ///
    /// Returns `true` if an item matched. A miss is a silent no-op:
    /// [`Cart::add_item`] is the creation path, increment never creates.
    pub fn increment(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrements the quantity of the item with the given id, evicting the
    /// item entirely when its quantity would reach 0.
    ///
    /// Returns `true` if an item matched (decremented or evicted). A miss
    /// is a silent no-op.
    pub fn decrement(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            // Quantity never becomes 0 and stays: the item is removed.
            self.items.remove(index);
        }
        true
    }

    /// Returns the line item with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Calculates the subtotal (Σ unit price × quantity).
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: f64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, price: f64) -> NewItem {
        NewItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://img.example/{}.png", id),
            price,
        }
    }

    #[test]
    fn test_add_new_item_starts_at_quantity_one() {
        let mut cart = Cart::new();

        assert!(cart.add_item(candidate("p1", 10.0)));

        assert_eq!(cart.item_count(), 1);
        let item = cart.get("p1").unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, 10.0);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();

        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p1", 10.0));

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_merge_keeps_position() {
        let mut cart = Cart::new();

        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p2", 4.5));
        cart.add_item(candidate("p1", 10.0));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_repeated_adds_never_duplicate() {
        let mut cart = Cart::new();

        for _ in 0..5 {
            cart.add_item(candidate("p1", 10.0));
            cart.add_item(candidate("p2", 4.5));
        }

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 10);
    }

    #[test]
    fn test_increment_existing() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p1", 10.0));

        assert!(cart.increment("p1"));
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_missing_is_noop() {
        let mut cart = Cart::new();

        assert!(!cart.increment("missing"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_evicts_at_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p1", 10.0));

        assert!(cart.decrement("p1"));
        assert_eq!(cart.get("p1").unwrap().quantity, 1);

        assert!(cart.decrement("p1"));
        assert!(cart.get("p1").is_none());
        assert!(cart.is_empty());

        // Item is gone, a further decrement is a no-op
        assert!(!cart.decrement("p1"));
    }

    #[test]
    fn test_decrement_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p1", 10.0));

        assert!(!cart.decrement("p2"));
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
    }

    #[test]
    fn test_no_item_below_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p2", 4.5));
        cart.increment("p1");
        cart.decrement("p1");
        cart.decrement("p2");

        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p2", 4.5));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, 24.5);
    }

    #[test]
    fn test_from_items_accepts_valid_snapshot() {
        let items: Vec<LineItem> = serde_json::from_str(
            r#"[{"id":"p2","title":"X","image_url":"u","price":5,"quantity":3}]"#,
        )
        .unwrap();

        let cart = Cart::from_items(items).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("p2").unwrap().quantity, 3);
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let dup = LineItem {
            id: "p1".to_string(),
            title: "T".to_string(),
            image_url: "u".to_string(),
            price: 1.0,
            quantity: 1,
        };

        let err = Cart::from_items(vec![dup.clone(), dup]).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn test_from_items_rejects_zero_quantity() {
        let zero = LineItem {
            id: "p1".to_string(),
            title: "T".to_string(),
            image_url: "u".to_string(),
            price: 1.0,
            quantity: 0,
        };

        let err = Cart::from_items(vec![zero]).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }

    #[test]
    fn test_snapshot_round_trip_preserves_order_and_quantities() {
        let mut cart = Cart::new();
        cart.add_item(candidate("p3", 2.0));
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p1", 10.0));
        cart.add_item(candidate("p2", 4.5));

        let payload = serde_json::to_string(&cart).unwrap();
        let items: Vec<LineItem> = serde_json::from_str(&payload).unwrap();
        let restored = Cart::from_items(items).unwrap();

        assert_eq!(restored, cart);
    }

    #[test]
    fn test_validate_requires_id() {
        let mut item = candidate("p1", 10.0);
        assert!(item.validate().is_ok());

        item.id.clear();
        let err = item.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }
}
