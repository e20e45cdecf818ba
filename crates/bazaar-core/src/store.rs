//! # Storefront
//!
//! The aggregate behind every user action: catalog, cart, view, and checkout
//! phase in one place.
//!
//! ## Action Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI control                    Storefront method                        │
//! │  ──────────                    ─────────────────                        │
//! │  "عرض التفاصيل" on a card ────► view_product(id)                        │
//! │  "العودة إلى القائمة" ─────────► clear_selection()                       │
//! │  "إضافة إلى السلة" ────────────► add_selected_to_cart()                 │
//! │  header "السلة" button ────────► toggle_cart()                          │
//! │  "العودة إلى التسوق" ──────────► close_cart()                            │
//! │  "حذف" on row i ───────────────► remove_from_cart(i)                    │
//! │  "إتمام الشراء" ───────────────► begin_checkout()                       │
//! │       ... delay (app) ...  ────► complete_checkout(order_id, now)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! While a checkout is processing, only `begin_checkout` is blocked. Adding
//! and removing still work, and completion clears whatever is in the cart at
//! that moment.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutPhase, Receipt};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartEntry, Panel, Product};
use crate::view::ViewState;

/// All storefront state for one shopper.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: Cart,
    view: ViewState,
    checkout: CheckoutPhase,
}

impl Storefront {
    /// Fresh storefront: catalog grid, empty cart, checkout idle.
    pub fn new(catalog: Catalog) -> Self {
        Storefront::with_shared_catalog(Arc::new(catalog))
    }

    pub fn with_shared_catalog(catalog: Arc<Catalog>) -> Self {
        Storefront {
            catalog,
            cart: Cart::new(),
            view: ViewState::new(),
            checkout: CheckoutPhase::Idle,
        }
    }

    // -------------------------------------------------------------------------
    // Catalog & selection
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Opens the detail panel for catalog product `id`.
    pub fn view_product(&mut self, id: u32) -> CoreResult<&Product> {
        let product = self.catalog.require(id)?.clone();
        self.view.view_product(product);
        self.view.selected().ok_or(CoreError::NothingSelected)
    }

    /// Back to the catalog grid. The cart is untouched.
    pub fn clear_selection(&mut self) {
        self.view.clear_selection();
    }

    pub fn selected(&self) -> Option<&Product> {
        self.view.selected()
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Appends catalog product `id` to the cart.
    pub fn add_to_cart(&mut self, id: u32) -> CoreResult<()> {
        let product = self.catalog.require(id)?;
        self.cart.add(product);
        Ok(())
    }

    /// The detail panel's add button: append the selected product, then go
    /// back to the catalog.
    pub fn add_selected_to_cart(&mut self) -> CoreResult<&Product> {
        let product = self.view.selected().ok_or(CoreError::NothingSelected)?;
        self.cart.add(product);
        self.view.clear_selection();
        self.cart
            .entries()
            .last()
            .map(|entry| &entry.product)
            .ok_or(CoreError::NothingSelected)
    }

    /// Removes the entry at `index`. A bad index is ignored.
    pub fn remove_from_cart(&mut self, index: usize) -> Option<CartEntry> {
        self.cart.remove_at(index)
    }

    /// Sum of cart prices, recomputed on each call.
    pub fn total_price(&self) -> Money {
        self.cart.total()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // -------------------------------------------------------------------------
    // Panels
    // -------------------------------------------------------------------------

    pub fn toggle_cart(&mut self) {
        self.view.toggle_cart();
    }

    pub fn close_cart(&mut self) {
        self.view.set_cart_visible(false);
    }

    pub fn panel(&self) -> Panel {
        self.view.panel()
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    pub fn checkout_phase(&self) -> CheckoutPhase {
        self.checkout
    }

    /// Disables the checkout control and starts processing.
    ///
    /// ## Errors
    /// - `EmptyCart` - the control is not shown for an empty cart
    /// - `CheckoutInProgress` - the control is disabled
    pub fn begin_checkout(&mut self) -> CoreResult<()> {
        if self.checkout.is_processing() {
            return Err(CoreError::CheckoutInProgress);
        }
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.checkout.begin()
    }

    /// Ends a processing checkout successfully: empties the cart, hides the
    /// cart panel, re-enables the control.
    pub fn complete_checkout(
        &mut self,
        order_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> CoreResult<Receipt> {
        self.checkout.finish()?;

        let receipt = Receipt::new(order_id, self.cart.len(), self.cart.total(), completed_at);
        self.cart.clear();
        self.view.set_cart_visible(false);
        Ok(receipt)
    }

    /// Abandons a processing checkout. Cart and panels are left as they are.
    pub fn cancel_checkout(&mut self) -> CoreResult<()> {
        self.checkout.finish()
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Owned copy of everything a renderer or observer needs.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            panel: self.panel(),
            selected: self.view.selected().cloned(),
            cart_visible: self.view.is_cart_visible(),
            cart: self.cart.entries().to_vec(),
            cart_count: self.cart.len(),
            total: self.cart.total(),
            checkout: self.checkout,
        }
    }
}

/// Point-in-time view of a [`Storefront`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub panel: Panel,
    pub selected: Option<Product>,
    pub cart_visible: bool,
    pub cart: Vec<CartEntry>,
    pub cart_count: usize,
    pub total: Money,
    pub checkout: CheckoutPhase,
}

// =============================================================================
// Unit Tests
// =============================================================================
