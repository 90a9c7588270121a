//! # Store
//!
//! The store owns the catalog and the membership registry and is the only
//! entry point callers use. Products and customers are looked up by id and
//! the store delegates the simple mutations to them.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        check_out_member("QWF")                          │
//! │                                                                         │
//! │  membership["QWF"] ──► None ──────────────────► InvalidCheckout("QWF")  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  for each cart line (cart order)                                       │
//! │        │                                                                │
//! │        ├── inventory[product_id] ──► None ──► skipped, logged          │
//! │        │                                                                │
//! │        └── repeat up to `requested` times:                             │
//! │              decrease_quantity() ──► false ──► stop (partial fill)      │
//! │                     │                                                   │
//! │                     └──► true ──► line_total += price                  │
//! │                                                                         │
//! │  empty_cart()                                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  premium? subtotal : subtotal + surcharge(7%)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is single-threaded (`&mut self`). Wrap it in
//! [`SharedStore`](crate::shared::SharedStore) for concurrent callers.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::money::Money;
use crate::types::{Customer, Product, Receipt, ReceiptLine, SkippedLine};
use crate::validation::{validate_customer, validate_product};

/// An in-memory store: catalog + membership registry.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inventory: HashMap<String, Product>,
    membership: HashMap<String, Customer>,
    config: StoreConfig,
}

impl Store {
    /// Creates an empty store with the default pricing policy.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with a custom pricing policy.
    pub fn with_config(config: StoreConfig) -> Self {
        Store {
            inventory: HashMap::new(),
            membership: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Registers a product under its id.
    ///
    /// ## Errors
    /// - `Validation` if the id or title is empty or the price is negative
    /// - `DuplicateProduct` if the id is already in the catalog; the existing
    ///   product is left as it was
    pub fn add_product(&mut self, product: Product) -> StoreResult<()> {
        validate_product(&product)?;

        if self.inventory.contains_key(product.id()) {
            warn!(product_id = %product.id(), "Product already exists, not adding");
            return Err(StoreError::DuplicateProduct(product.id().to_string()));
        }

        debug!(
            product_id = %product.id(),
            price = %product.price(),
            quantity = product.quantity_available(),
            "Adding product"
        );
        self.inventory.insert(product.id().to_string(), product);
        Ok(())
    }

    /// Takes a product out of the catalog.
    ///
    /// Carts may still reference it; checkout skips those lines.
    pub fn remove_product(&mut self, product_id: &str) -> StoreResult<Product> {
        debug!(product_id = %product_id, "Removing product");
        self.inventory
            .remove(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))
    }

    /// Looks up a product. Unknown ids give `None`.
    pub fn get_product_from_id(&self, product_id: &str) -> Option<&Product> {
        self.inventory.get(product_id)
    }

    /// Iterates over the catalog in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.inventory.values()
    }

    pub fn product_count(&self) -> usize {
        self.inventory.len()
    }

    /// Finds products whose title or description contains `query`.
    ///
    /// Matching ignores case. Returns product ids sorted ascending; an empty
    /// query matches everything.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product, Store};
    ///
    /// let mut store = Store::new();
    /// store
    ///     .add_product(Product::new(
    ///         "889",
    ///         "Rodent of unusual size",
    ///         "when a rodent of the usual size just won't do",
    ///         Money::from_major_minor(33, 45),
    ///         8,
    ///     ))
    ///     .unwrap();
    ///
    /// assert_eq!(store.product_search("RODENT"), vec!["889".to_string()]);
    /// assert!(store.product_search("hamster").is_empty());
    /// ```
    pub fn product_search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();

        let mut ids: Vec<String> = self
            .inventory
            .values()
            .filter(|product| product.matches(&needle))
            .map(|product| product.id().to_string())
            .collect();
        ids.sort_unstable();

        debug!(query = %query, count = ids.len(), "Search returned products");
        ids
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Registers a customer under their id.
    ///
    /// Duplicates are detected by id, the same way as for products.
    pub fn add_member(&mut self, customer: Customer) -> StoreResult<()> {
        validate_customer(&customer)?;

        if self.membership.contains_key(customer.id()) {
            warn!(customer_id = %customer.id(), "Member already exists, not adding");
            return Err(StoreError::DuplicateMember(customer.id().to_string()));
        }

        debug!(
            customer_id = %customer.id(),
            premium = customer.is_premium_member(),
            "Adding member"
        );
        self.membership.insert(customer.id().to_string(), customer);
        Ok(())
    }

    /// Looks up a member. Unknown ids give `None`.
    pub fn get_member_from_id(&self, customer_id: &str) -> Option<&Customer> {
        self.membership.get(customer_id)
    }

    /// Iterates over the membership registry in no particular order.
    pub fn members(&self) -> impl Iterator<Item = &Customer> {
        self.membership.values()
    }

    pub fn member_count(&self) -> usize {
        self.membership.len()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of a product to a member's cart.
    ///
    /// ## Errors (checked in this order)
    /// 1. `ProductNotFound`
    /// 2. `MemberNotFound`
    /// 3. `OutOfStock` when the product has zero units available
    ///
    /// Stock is only checked against zero here. Asking for more units than
    /// are in stock is allowed; checkout fills what it can.
    pub fn add_product_to_member_cart(
        &mut self,
        product_id: &str,
        customer_id: &str,
    ) -> StoreResult<()> {
        let product = self
            .inventory
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

        let customer = self
            .membership
            .get_mut(customer_id)
            .ok_or_else(|| StoreError::MemberNotFound(customer_id.to_string()))?;

        if !product.is_in_stock() {
            debug!(product_id = %product_id, "Product out of stock, not adding to cart");
            return Err(StoreError::OutOfStock(product_id.to_string()));
        }

        customer.add_product_to_cart(product_id);
        debug!(
            product_id = %product_id,
            customer_id = %customer_id,
            in_cart = customer.cart().quantity_of(product_id),
            "Product added to cart"
        );
        Ok(())
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Checks out a member and returns the amount charged.
    ///
    /// See [`Store::check_out_member_with_receipt`] for the full breakdown.
    pub fn check_out_member(&mut self, customer_id: &str) -> StoreResult<Money> {
        self.check_out_member_with_receipt(customer_id)
            .map(|receipt| receipt.total)
    }

    /// Checks out a member's cart.
    ///
    /// Each cart line is filled one unit at a time: a unit is charged at the
    /// product's price only if it could be taken from stock. Lines that ask
    /// for more than is available are filled partially with no backorder.
    /// The cart is emptied afterwards whatever was filled.
    ///
    /// ## Errors
    /// `InvalidCheckout` if the id is not a member. Nothing is changed.
    pub fn check_out_member_with_receipt(&mut self, customer_id: &str) -> StoreResult<Receipt> {
        let customer = match self.membership.get_mut(customer_id) {
            Some(customer) => customer,
            None => {
                warn!(customer_id = %customer_id, "Checkout for unknown member");
                return Err(StoreError::InvalidCheckout(customer_id.to_string()));
            }
        };

        let mut lines = Vec::with_capacity(customer.cart().len());
        let mut skipped = Vec::new();

        for cart_line in customer.cart().lines() {
            let Some(product) = self.inventory.get_mut(&cart_line.product_id) else {
                warn!(
                    customer_id = %customer_id,
                    product_id = %cart_line.product_id,
                    "Cart references a product that is no longer stocked, skipping"
                );
                skipped.push(SkippedLine {
                    product_id: cart_line.product_id.clone(),
                    requested: cart_line.quantity,
                });
                continue;
            };

            let mut fulfilled = 0;
            let mut line_total = Money::zero();
            while fulfilled < cart_line.quantity && product.decrease_quantity() {
                line_total += product.price();
                fulfilled += 1;
            }

            if fulfilled < cart_line.quantity {
                debug!(
                    product_id = %cart_line.product_id,
                    requested = cart_line.quantity,
                    fulfilled,
                    "Partially filled cart line"
                );
            }

            lines.push(ReceiptLine {
                product_id: cart_line.product_id.clone(),
                title_snapshot: product.title().to_string(),
                unit_price: product.price(),
                requested: cart_line.quantity,
                fulfilled,
                line_total,
            });
        }

        customer.empty_cart();

        let premium_member = customer.is_premium_member();
        let subtotal: Money = lines.iter().map(|line| line.line_total).sum();
        let surcharge = if premium_member {
            Money::zero()
        } else {
            subtotal.surcharge(self.config.non_member_surcharge)
        };

        let receipt = Receipt {
            id: Uuid::new_v4(),
            customer_id: customer_id.to_string(),
            premium_member,
            lines,
            skipped,
            subtotal,
            surcharge,
            total: subtotal + surcharge,
            checked_out_at: Utc::now(),
        };

        info!(
            receipt_id = %receipt.id,
            customer_id = %customer_id,
            units = receipt.units_fulfilled(),
            subtotal = %receipt.subtotal,
            total = %receipt.total,
            "Member checked out"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
