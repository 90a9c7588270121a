//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    33.45 * 3 * 1.07 = 107.37449999999999  ❌                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    3345 * 3          = 10035 cents                                      │
//! │    10035 * 700 bps   = 702 cents surcharge (rounded half up)           │
//! │    total             = 10737 cents = $107.37                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_major_minor(33, 45); // $33.45
//!
//! let line_total = price * 3u32;               // $100.35
//! assert_eq!(line_total.cents(), 10035);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::SurchargeRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serialises as a bare integer
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► ReceiptLine.line_total ──► Receipt.subtotal
///                                                   │
///                                    surcharge (non-premium only)
///                                                   │
///                                                   ▼
///                                             Receipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(3345); // Represents $33.45
    /// assert_eq!(price.cents(), 3345);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_major_minor(33, 45);
    /// assert_eq!(price.cents(), 3345);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the surcharge owed on this amount.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// i128 keeps large amounts from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::SurchargeRate;
    ///
    /// let subtotal = Money::from_cents(10035); // $100.35
    /// let surcharge = subtotal.surcharge(SurchargeRate::from_bps(700));
    /// // $100.35 × 7% = $7.0245 → $7.02
    /// assert_eq!(surcharge.cents(), 702);
    /// ```
    pub fn surcharge(&self, rate: SurchargeRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Returns this amount with the surcharge added on top.
    #[inline]
    pub fn with_surcharge(&self, rate: SurchargeRate) -> Money {
        *self + self.surcharge(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`. Debug output only; presentation is up to callers.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        // pad() so callers can align amounts with `{:>9}`
        f.pad(&format!("{}${}.{:02}", sign, self.dollars().abs(), self.cents_part()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a unit count (stock and cart quantities are u32).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(33, 45);
        assert_eq!(money.cents(), 3345);
        assert_eq!(money.dollars(), 33);
        assert_eq!(money.cents_part(), 45);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(10737).to_string(), "$107.37");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(format!("{:>8}", Money::from_cents(3345)), "  $33.45");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut acc = Money::zero();
        acc += b;
        acc += b;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let total: Money = [3345, 3345, 3345]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 10035);
    }

    #[test]
    fn test_surcharge_rounding() {
        // $100.35 at 7% = $7.0245 → $7.02
        let subtotal = Money::from_cents(10035);
        let rate = SurchargeRate::from_bps(700);
        assert_eq!(subtotal.surcharge(rate).cents(), 702);
        assert_eq!(subtotal.with_surcharge(rate).cents(), 10737);

        // $0.50 at 7% = $0.035 → $0.04 (half rounds up)
        assert_eq!(Money::from_cents(50).surcharge(rate).cents(), 4);
    }

    #[test]
    fn test_zero_surcharge_is_identity() {
        let subtotal = Money::from_cents(6690);
        assert_eq!(subtotal.with_surcharge(SurchargeRate::zero()), subtotal);
    }
}
