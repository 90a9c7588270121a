//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── StoreError       - Catalog, membership, cart and checkout errors  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-demo errors (app)                                          │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending id in every message
//! 3. Errors are enum variants, never String
//! 4. Every failure is recoverable and returned to the immediate caller

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by [`Store`](crate::store::Store) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A product with this id is already in the catalog.
    ///
    /// The catalog is left untouched; the existing product is never
    /// overwritten.
    #[error("Product already exists: {0}")]
    DuplicateProduct(String),

    /// A customer with this id is already a member.
    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    /// Product id doesn't resolve against the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer id doesn't resolve against the membership registry.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// Cart addition attempted against a product with zero stock.
    ///
    /// ## User Workflow
    /// ```text
    /// add_product_to_member_cart("889", "QWF")
    ///      │
    ///      ▼
    /// Check stock: available=0
    ///      │
    ///      ▼
    /// OutOfStock("889")
    /// ```
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Checkout attempted for an id that is not a member of the store.
    ///
    /// Kept separate from [`StoreError::MemberNotFound`] so checkout
    /// failures can be told apart from cart failures.
    #[error("Invalid checkout: {0} is not a member of the store")]
    InvalidCheckout(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Returns true for the failures `add_product_to_member_cart` can produce.
    pub fn is_cart_error(&self) -> bool {
        matches!(
            self,
            StoreError::ProductNotFound(_) | StoreError::MemberNotFound(_) | StoreError::OutOfStock(_)
        )
    }

    /// Returns true when the operation was rejected because the id exists.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateProduct(_) | StoreError::DuplicateMember(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before an entity is registered with the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. the same product twice in one cart).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::OutOfStock("889".to_string());
        assert_eq!(err.to_string(), "Product out of stock: 889");

        let err = StoreError::InvalidCheckout("QWF".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid checkout: QWF is not a member of the store"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product id".to_string(),
        };
        assert_eq!(err.to_string(), "product id is required");

        let err = ValidationError::InvalidFormat {
            field: "cart".to_string(),
            reason: "duplicate line for 889".to_string(),
        };
        assert_eq!(err.to_string(), "cart has invalid format: duplicate line for 889");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required {
            field: "product id".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }

    #[test]
    fn test_error_classification() {
        assert!(StoreError::OutOfStock("a".into()).is_cart_error());
        assert!(StoreError::MemberNotFound("a".into()).is_cart_error());
        assert!(!StoreError::InvalidCheckout("a".into()).is_cart_error());

        assert!(StoreError::DuplicateMember("a".into()).is_duplicate());
        assert!(!StoreError::ProductNotFound("a".into()).is_duplicate());
    }
}
