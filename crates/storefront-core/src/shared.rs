//! # Shared Store
//!
//! Thread-safe handle around a [`Store`].
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several threads may add to carts and check out at once
//! 2. Checkout touches a customer's cart and product stock together, so it
//!    must run as one critical section
//! 3. Two checkouts racing for the last units of a product must never both
//!    get them
//!
//! Every method below holds the lock for the whole operation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  thread A: check_out_member("QWF") ──┐                                 │
//! │                                      ├──► Mutex<Store> ──► one at a    │
//! │  thread B: check_out_member("KRS") ──┘                      time       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use crate::error::StoreResult;
use crate::money::Money;
use crate::types::{Customer, Product, Receipt};
use crate::store::Store;

/// Cloneable, thread-safe handle to a single [`Store`].
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    store: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        SharedStore {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_core::{SharedStore, Store};
    ///
    /// let shared = SharedStore::new(Store::new());
    /// assert_eq!(shared.with_store(|store| store.product_count()), 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// Use this to run several operations as one atomic step.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }

    pub fn add_product(&self, product: Product) -> StoreResult<()> {
        self.with_store_mut(|store| store.add_product(product))
    }

    pub fn remove_product(&self, product_id: &str) -> StoreResult<Product> {
        self.with_store_mut(|store| store.remove_product(product_id))
    }

    pub fn add_member(&self, customer: Customer) -> StoreResult<()> {
        self.with_store_mut(|store| store.add_member(customer))
    }

    /// Returns a snapshot of the product.
    pub fn get_product_from_id(&self, product_id: &str) -> Option<Product> {
        self.with_store(|store| store.get_product_from_id(product_id).cloned())
    }

    /// Returns a snapshot of the member, cart included.
    pub fn get_member_from_id(&self, customer_id: &str) -> Option<Customer> {
        self.with_store(|store| store.get_member_from_id(customer_id).cloned())
    }

    pub fn product_search(&self, query: &str) -> Vec<String> {
        self.with_store(|store| store.product_search(query))
    }

    pub fn add_product_to_member_cart(&self, product_id: &str, customer_id: &str) -> StoreResult<()> {
        self.with_store_mut(|store| store.add_product_to_member_cart(product_id, customer_id))
    }

    pub fn check_out_member(&self, customer_id: &str) -> StoreResult<Money> {
        self.with_store_mut(|store| store.check_out_member(customer_id))
    }

    pub fn check_out_member_with_receipt(&self, customer_id: &str) -> StoreResult<Receipt> {
        self.with_store_mut(|store| store.check_out_member_with_receipt(customer_id))
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        SharedStore::new(store)
    }
}
