//! # Error Types
//!
//! Validation errors for gocart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gocart-core errors (this file)                                        │
//! │  └── ValidationError  - Input constraints + snapshot invariants        │
//! │                                                                         │
//! │  gocart-kv errors (separate crate)                                     │
//! │  └── KvError          - Storage operation failures                     │
//! │                                                                         │
//! │  gocart-store errors (separate crate)                                  │
//! │  └── CartError        - What consumers of the facade see               │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation and cart invariant errors.
///
/// Raised when an add candidate fails its input constraints, or when a
/// persisted snapshot decodes into a cart that violates the invariants
/// (duplicate ids, zero quantities).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be at least 1.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value where uniqueness is required (e.g. duplicate
    /// product id in a cart snapshot).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "p1".to_string(),
        };
        assert_eq!(err.to_string(), "id 'p1' already exists");
    }
}
