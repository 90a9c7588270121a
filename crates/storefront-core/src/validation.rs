//! # Validation Module
//!
//! Input validation applied before entities are registered with a store.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_id, validate_title};
//!
//! assert!(validate_id("product id", "889").is_ok());
//! assert!(validate_title("Rodent of unusual size").is_ok());
//! assert!(validate_title("").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CartLine, Customer, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Surcharge rates are capped at 100%.
pub const MAX_SURCHARGE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a caller-assigned id.
///
/// Must not be empty or whitespace only. Length and content are otherwise
/// up to the caller.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product title. Must not be empty; no length limit.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(3345)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a surcharge rate in basis points (0% to 100%).
pub fn validate_surcharge_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_SURCHARGE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "surcharge".to_string(),
            min: 0,
            max: MAX_SURCHARGE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Checks cart lines built outside [`Cart::add`](crate::types::Cart::add).
///
/// ## Rules
/// - Every line has quantity >= 1
/// - No product appears on two lines
pub fn validate_cart_lines(lines: &[CartLine]) -> ValidationResult<()> {
    for (i, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(ValidationError::OutOfRange {
                field: format!("cart quantity for {}", line.product_id),
                min: 1,
                max: u32::MAX as i64,
            });
        }

        if lines[..i].iter().any(|l| l.product_id == line.product_id) {
            return Err(ValidationError::InvalidFormat {
                field: "cart".to_string(),
                reason: format!("duplicate line for {}", line.product_id),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Checks everything `Store::add_product` requires of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_id("product id", product.id())?;
    validate_title(product.title())?;
    validate_price(product.price())
}

/// Checks everything `Store::add_member` requires of a customer.
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_id("customer id", customer.id())
}

// =============================================================================
// Unit Tests
// =============================================================================
