//! # bazaar-core: Pure Storefront Logic
//!
//! This crate holds everything the storefront *decides*: which panel is
//! visible, what is in the cart, what the cart costs, and where checkout is.
//! It never waits, sleeps, or touches the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bazaar Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Document Surface (HTML, dir="rtl")              │   │
//! │  │    Catalog Grid ──► Product Detail ──► Cart Panel ──► Checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ click events                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands (app)                    │   │
//! │  │    view_product, add_to_cart, remove_from_cart, checkout, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │   view    │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │ ViewState │  │   │
//! │  │   │  Product  │  │           │  │ CartEntry │  │   Panel   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   checkout (phases + receipt) ── store (Storefront aggregate)   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE STATE TRANSITIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartEntry, Panel)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product list
//! - [`cart`] - Ordered cart with positional removal
//! - [`view`] - Which panel is visible
//! - [`checkout`] - Checkout phases and receipts
//! - [`store`] - The `Storefront` aggregate tying it all together
//! - [`error`] - Domain error types
//! - [`validation`] - Product field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::{catalog::Catalog, store::Storefront};
//!
//! let mut store = Storefront::new(Catalog::default_catalog());
//! store.add_to_cart(1).unwrap(); // 150 riyal
//! store.add_to_cart(2).unwrap(); // 250 riyal
//! assert_eq!(store.total_price().major(), 400);
//!
//! store.remove_from_cart(0);
//! assert_eq!(store.total_price().major(), 250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{CheckoutPhase, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{StoreSnapshot, Storefront};
pub use types::*;
pub use view::ViewState;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor currency units per major unit (halalas per riyal).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_CHARS: usize = 200;

/// Maximum length of a product description, in characters.
pub const MAX_PRODUCT_DESCRIPTION_CHARS: usize = 2000;
