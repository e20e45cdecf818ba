//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - Storefront rule violations                     │
//! │  └── ValidationError  - Malformed catalog data                         │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  ├── ApiError         - What a command caller sees (serialized)        │
//! │  └── StartupError     - Config / catalog problems at boot              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Document surface       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most storefront actions cannot fail at all. The variants below cover the
//! few that can: an id that is not in the catalog, an action whose control
//! would not be rendered (empty cart, nothing selected), and the re-entrant
//! checkout guard.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// "Add to cart" from the detail panel with no product selected.
    #[error("No product is selected")]
    NothingSelected,

    /// Checked positional removal outside the cart.
    ///
    /// The command layer uses the unchecked removal and ignores bad indexes;
    /// this variant exists for callers that ask for a checked removal.
    #[error("Cart index {index} is out of range (cart has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Checkout was triggered on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout was triggered while another checkout is processing.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "إتمام الشراء"
    ///      │
    ///      ▼
    /// phase: Idle → Processing   (button disabled)
    ///      │
    ///      ├── Click again ──► CheckoutInProgress (ignored by the UI)
    ///      │
    ///      ▼
    /// delay elapses → Idle
    /// ```
    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    /// Completion or cancellation arrived while no checkout was processing.
    #[error("No checkout is in progress")]
    CheckoutNotStarted,

    /// Two catalog products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors for catalog data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., unparseable URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Cart index 5 is out of range (cart has 2 entries)"
        );
        assert_eq!(CoreError::ProductNotFound(9).to_string(), "Product not found: 9");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "image".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
