//! # gocart-core: Pure Cart Domain for GoCart
//!
//! This crate is the **heart** of GoCart. It contains the cart's merge and
//! eviction rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GoCart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (out of scope)               │   │
//! │  │        product list ──► cart screen ──► quantity buttons        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartHandle                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  gocart-store (state machine)                   │   │
//! │  │        hydration • snapshot writes • change notification        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gocart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                 │   │
//! │  │   │   cart    │  │   cart    │  │   error    │                 │   │
//! │  │   │ LineItem  │  │   Cart    │  │ Validation │                 │   │
//! │  │   │  NewItem  │  │ CartTotals│  │   Error    │                 │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Line items, the cart collection, merge/eviction rules
//! - [`error`] - Validation error types
//!
//! ## Invariants Enforced Here
//!
//! 1. **Unique ids**: no two line items in a cart share a product id
//! 2. **Quantity floor**: every present item has quantity >= 1; an item
//!    that would reach 0 is evicted, never retained at 0
//! 3. **Stable order**: insertion order is preserved; quantity changes
//!    mutate in place and never move an entry

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gocart_core::Cart` instead of
// `use gocart_core::cart::Cart`

pub use cart::{Cart, CartTotals, LineItem, NewItem};
pub use error::{ValidationError, ValidationResult};
