//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the whole store domain: products with stock, customers with
//! carts, and a store that mediates catalog search, cart additions and
//! checkout pricing. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-demo (app)                           │   │
//! │  │      env config ──► tracing init ──► sample checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Store   │  │   rules   │  │   │
//! │  │   │  Customer │  │ Surcharge │  │  Shared   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Cart, Receipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`store`] - The store: catalog, membership, cart and checkout
//! - [`shared`] - Mutex-guarded store handle for concurrent callers
//! - [`config`] - Pricing policy
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Customer, Money, Product, Store};
//!
//! let mut store = Store::new();
//! store.add_product(Product::new(
//!     "889",
//!     "Rodent of unusual size",
//!     "when a rodent of the usual size just won't do",
//!     Money::from_major_minor(33, 45),
//!     8,
//! ))?;
//! store.add_member(Customer::new("Yinsheng", "QWF", false))?;
//!
//! store.add_product_to_member_cart("889", "QWF")?;
//!
//! // Non-premium members pay a 7% surcharge: $33.45 → $35.79
//! let cost = store.check_out_member("QWF")?;
//! assert_eq!(cost.cents(), 3579);
//! # Ok::<(), storefront_core::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod shared;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use shared::SharedStore;
pub use store::Store;
pub use types::*;
