//! # Cart Error Types
//!
//! What consumers of the facade see.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CartError                                       │
//! │                                                                         │
//! │  Configuration   Unconfigured, AlreadyProvided   fatal, surface now     │
//! │  Read path       SnapshotCorrupt, Storage        fatal at open          │
//! │  Write path      SnapshotEncode, PersistAborted, reported via ticket;   │
//! │                  Storage                         memory is unaffected   │
//! │  Input           Validation                      rejected before mutate │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Caller misuse of increment/decrement on a missing id is deliberately
//! NOT an error: those are silent no-ops (see `CartStore`).

use thiserror::Error;

use gocart_core::ValidationError;
use gocart_kv::KvError;

/// Errors surfaced by the cart store and its facade.
#[derive(Debug, Error)]
pub enum CartError {
    /// The facade was used outside its construction scope: a `CartSlot`
    /// was read before any handle was provided. Fatal to the calling
    /// code path; fix the wiring instead of retrying.
    #[error("Cart accessed before a store was provided")]
    Unconfigured,

    /// A `CartSlot` was provided twice. The slot is set-once.
    #[error("Cart handle already provided for this slot")]
    AlreadyProvided,

    /// The persisted snapshot failed to decode or violated cart
    /// invariants at hydration. Propagated from open; the stored bytes
    /// are left untouched for inspection.
    #[error("Cart snapshot is corrupt: {0}")]
    SnapshotCorrupt(String),

    /// The in-memory cart failed to encode for persistence.
    #[error("Cart snapshot could not be encoded: {0}")]
    SnapshotEncode(String),

    /// The spawned persistence task was cancelled or panicked before
    /// reporting an outcome.
    #[error("Persistence task aborted: {0}")]
    PersistAborted(String),

    /// An add candidate failed its input constraints.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage adapter failed.
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CartError::Unconfigured.to_string(),
            "Cart accessed before a store was provided"
        );
        assert_eq!(
            CartError::SnapshotCorrupt("expected value at line 1".to_string()).to_string(),
            "Cart snapshot is corrupt: expected value at line 1"
        );
    }

    #[test]
    fn test_validation_error_lifts() {
        let err: CartError = ValidationError::Required {
            field: "id".to_string(),
        }
        .into();
        assert!(matches!(err, CartError::Validation(_)));
    }
}
