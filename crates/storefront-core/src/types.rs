//! # Domain Types
//!
//! Core domain types used throughout storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (UUID)      │       │
//! │  │  title          │   │  name           │   │  lines          │       │
//! │  │  price (Money)  │   │  premium_member │   │  subtotal       │       │
//! │  │  quantity       │   │  cart ──────┐   │   │  total          │       │
//! │  └─────────────────┘   └─────────────┼───┘   └─────────────────┘       │
//! │          ▲                           ▼                                  │
//! │          │  product_id      ┌─────────────────┐                        │
//! │          └──────────────────│      Cart       │                        │
//! │                             │  Vec<CartLine>  │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Carts hold product ids, never references. Ids resolve against the store's
//! catalog at checkout time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_cart_lines, validate_surcharge_bps};

// =============================================================================
// Surcharge Rate
// =============================================================================

/// Surcharge rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 700 bps = 7%. Serialises as a bare integer;
/// deserialising rejects rates above 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SurchargeRate(u32);

impl SurchargeRate {
    /// Creates a surcharge rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        SurchargeRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero surcharge.
    #[inline]
    pub const fn zero() -> Self {
        SurchargeRate(0)
    }
}

impl Default for SurchargeRate {
    fn default() -> Self {
        SurchargeRate::zero()
    }
}

impl TryFrom<u32> for SurchargeRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        validate_surcharge_bps(bps)?;
        Ok(SurchargeRate(bps))
    }
}

impl From<SurchargeRate> for u32 {
    fn from(rate: SurchargeRate) -> u32 {
        rate.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store's catalog.
///
/// Everything except the stock counter is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    title: String,
    description: String,
    price: Money,
    quantity_available: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity_available: u32,
    ) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            price,
            quantity_available,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity_available(&self) -> u32 {
        self.quantity_available
    }

    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity_available > 0
    }

    /// Removes one unit from stock.
    ///
    /// Returns `false` and leaves stock untouched when it is already zero.
    /// Checkout calls this once per unit so it can stop part way through a
    /// cart line.
    pub fn decrease_quantity(&mut self) -> bool {
        if self.quantity_available == 0 {
            debug!(product_id = %self.id, "Stock already at zero, nothing to decrease");
            return false;
        }
        self.quantity_available -= 1;
        true
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A line in a customer's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    /// Always >= 1; a product with zero units has no line.
    pub quantity: u32,
}

/// A customer's pending purchases: product id → requested unit count.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product bumps the count)
/// - Every line has quantity >= 1
/// - Lines keep the order in which products were first added
///
/// Serialises as a list of lines. Deserialising goes through
/// [`validate_cart_lines`], so a stored cart can't break the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of `product_id`, returning the new count for that line.
    pub fn add(&mut self, product_id: &str) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity: 1,
        });
        1
    }

    /// Requested count for `product_id` (zero if absent).
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = ValidationError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        validate_cart_lines(&lines)?;
        Ok(Cart { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered store member with a shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    id: String,
    premium_member: bool,
    cart: Cart,
}

impl Customer {
    /// Creates a customer with an empty cart.
    pub fn new(name: impl Into<String>, id: impl Into<String>, premium_member: bool) -> Self {
        Customer {
            name: name.into(),
            id: id.into(),
            premium_member,
            cart: Cart::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Premium members are exempt from the checkout surcharge.
    #[inline]
    pub fn is_premium_member(&self) -> bool {
        self.premium_member
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of `product_id` to the cart.
    ///
    /// No catalog or stock checks happen here; the store does those before
    /// delegating.
    pub fn add_product_to_cart(&mut self, product_id: &str) {
        self.cart.add(product_id);
    }

    pub fn empty_cart(&mut self) {
        self.cart.clear();
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One fulfilled cart line on a receipt.
///
/// Uses snapshot pattern to freeze product data at time of checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: String,
    /// Product title at time of checkout (frozen).
    pub title_snapshot: String,
    /// Unit price at time of checkout (frozen).
    pub unit_price: Money,
    /// Units the customer had in the cart.
    pub requested: u32,
    /// Units actually taken from stock and charged.
    pub fulfilled: u32,
    /// Sum of the per-unit charges.
    pub line_total: Money,
}

impl ReceiptLine {
    /// Requested units that were not in stock.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.fulfilled)
    }
}

/// A cart line whose product was no longer in the catalog at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub product_id: String,
    pub requested: u32,
}

/// Outcome of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub customer_id: String,
    pub premium_member: bool,
    pub lines: Vec<ReceiptLine>,
    pub skipped: Vec<SkippedLine>,
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Zero for premium members.
    pub surcharge: Money,
    /// What the customer is charged.
    pub total: Money,
    pub checked_out_at: DateTime<Utc>,
}

impl Receipt {
    /// Total units charged across all lines.
    pub fn units_fulfilled(&self) -> u32 {
        self.lines.iter().map(|l| l.fulfilled).sum()
    }

    /// Total requested units that could not be fulfilled.
    pub fn units_short(&self) -> u32 {
        self.lines.iter().map(ReceiptLine::shortfall).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rodent(quantity: u32) -> Product {
        Product::new(
            "889",
            "Rodent of unusual size",
            "when a rodent of the usual size just won't do",
            Money::from_major_minor(33, 45),
            quantity,
        )
    }

    #[test]
    fn test_surcharge_rate_from_bps() {
        let rate = SurchargeRate::from_bps(700);
        assert_eq!(rate.bps(), 700);
        assert!((rate.percentage() - 7.0).abs() < 0.001);
        assert_eq!(SurchargeRate::default(), SurchargeRate::zero());
    }

    #[test]
    fn test_product_accessors() {
        let product = rodent(8);
        assert_eq!(product.id(), "889");
        assert_eq!(product.title(), "Rodent of unusual size");
        assert_eq!(product.price().cents(), 3345);
        assert_eq!(product.quantity_available(), 8);
        assert!(product.is_in_stock());
    }

    #[test]
    fn test_decrease_quantity() {
        let mut product = rodent(8);
        assert!(product.decrease_quantity());
        assert_eq!(product.quantity_available(), 7);
    }

    #[test]
    fn test_decrease_quantity_floors_at_zero() {
        let mut product = rodent(3);
        for _ in 0..3 {
            assert!(product.decrease_quantity());
        }
        assert!(!product.decrease_quantity());
        assert_eq!(product.quantity_available(), 0);
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_product_matches() {
        let product = rodent(1);
        assert!(product.matches("rodent"));
        assert!(product.matches("usual size"));
        assert!(!product.matches("hamster"));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add("prod_001"), 1);
        assert_eq!(cart.add("prod_001"), 2);
        cart.add("prod_002");

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of("prod_001"), 2);
        assert_eq!(cart.quantity_of("prod_003"), 0);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add("b");
        cart.add("a");
        cart.add("b");

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_customer_cart() {
        let mut customer = Customer::new("Yinsheng", "QWF", true);
        assert!(customer.is_premium_member());

        customer.add_product_to_cart("prod_001");
        customer.add_product_to_cart("prod_002");
        assert!(customer.cart().contains("prod_001"));
        assert!(!customer.cart().contains("prod_003"));

        customer.empty_cart();
        assert!(customer.cart().is_empty());

        // Emptying an empty cart is fine too
        customer.empty_cart();
        assert!(customer.cart().is_empty());
    }

    #[test]
    fn test_receipt_line_shortfall() {
        let line = ReceiptLine {
            product_id: "889".into(),
            title_snapshot: "Rodent of unusual size".into(),
            unit_price: Money::from_cents(3345),
            requested: 3,
            fulfilled: 2,
            line_total: Money::from_cents(6690),
        };
        assert_eq!(line.shortfall(), 1);

        // A hand-edited receipt can claim more than was requested
        let over = ReceiptLine {
            fulfilled: 5,
            ..line
        };
        assert_eq!(over.shortfall(), 0);
    }

    #[test]
    fn test_surcharge_rate_deserialize_checks_range() {
        let rate: SurchargeRate = serde_json::from_str("700").unwrap();
        assert_eq!(rate.bps(), 700);
        assert_eq!(serde_json::to_string(&rate).unwrap(), "700");

        assert!(serde_json::from_str::<SurchargeRate>("10001").is_err());
        assert!(serde_json::from_str::<SurchargeRate>("4000000000").is_err());
    }

    #[test]
    fn test_cart_json_round_trip() {
        let mut customer = Customer::new("Yinsheng", "QWF", false);
        customer.add_product_to_cart("889");
        customer.add_product_to_cart("889");

        let json = serde_json::to_string(&customer).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, customer);
        assert_eq!(parsed.cart().quantity_of("889"), 2);
    }

    #[test]
    fn test_cart_deserialize_rejects_broken_lines() {
        let zero_then_dup = r#"{
            "name": "Yinsheng",
            "id": "QWF",
            "premium_member": false,
            "cart": [{"product_id": "1", "quantity": 0}, {"product_id": "1", "quantity": 2}]
        }"#;
        assert!(serde_json::from_str::<Customer>(zero_then_dup).is_err());

        let dup = r#"[{"product_id": "1", "quantity": 1}, {"product_id": "1", "quantity": 2}]"#;
        assert!(serde_json::from_str::<Cart>(dup).is_err());

        let ok = r#"[{"product_id": "1", "quantity": 1}, {"product_id": "2", "quantity": 2}]"#;
        let cart: Cart = serde_json::from_str(ok).unwrap();
        assert_eq!(cart.total_quantity(), 3);
    }
}
