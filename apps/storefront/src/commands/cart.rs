//! # Cart Commands
//!
//! Commands for cart manipulation and the cart panel.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│Processing│────►│  Empty   │       │
//! │  │  Cart    │     │          │     │ (1000ms) │     │  Cart    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_to_cart        checkout (checkout.rs)             │
//! │                   add_selected_to_cart                                  │
//! │                   remove_from_cart                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding the same product twice gives two entries; entries are removed by
//! position, not by product.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bazaar_core::{CartEntry, Money, StoreSnapshot, Storefront};

use crate::error::ApiError;
use crate::state::StoreState;

/// Cart response: entries in insertion order, with count and total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub count: usize,
    pub total: Money,
}

impl From<&Storefront> for CartResponse {
    fn from(store: &Storefront) -> Self {
        CartResponse {
            entries: store.cart().entries().to_vec(),
            count: store.cart().len(),
            total: store.total_price(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Appends a product to the cart by id.
///
/// ## Errors
/// `NOT_FOUND` for an id outside the catalog.
pub fn add_to_cart(store: &StoreState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let response = store.update(|s| {
        s.add_to_cart(product_id)?;
        Ok::<CartResponse, ApiError>(CartResponse::from(&*s))
    })?;

    Ok(response)
}

/// The detail panel's "add to cart" button: appends the selected product
/// and returns to the catalog.
///
/// ## Errors
/// `NOTHING_SELECTED` when the detail panel is not open.
pub fn add_selected_to_cart(store: &StoreState) -> Result<CartResponse, ApiError> {
    debug!("add_selected_to_cart command");

    let response = store.update(|s| {
        let product_id = s.add_selected_to_cart()?.id;
        debug!(product_id, "Selected product added");
        Ok::<CartResponse, ApiError>(CartResponse::from(&*s))
    })?;

    Ok(response)
}

/// Removes the entry at `index`.
///
/// An index past the end changes nothing and is not reported to the user.
pub fn remove_from_cart(store: &StoreState, index: usize) -> CartResponse {
    debug!(index, "remove_from_cart command");

    store.update(|s| {
        match s.remove_from_cart(index) {
            Some(entry) => debug!(index, product_id = entry.product.id, "Cart entry removed"),
            None => warn!(index, len = s.cart().len(), "Ignoring removal past end of cart"),
        }
        CartResponse::from(&*s)
    })
}

/// Shows or hides the cart panel.
pub fn toggle_cart(store: &StoreState) -> StoreSnapshot {
    debug!("toggle_cart command");
    store.update(|s| s.toggle_cart());
    store.snapshot()
}

/// Hides the cart panel.
pub fn close_cart(store: &StoreState) -> StoreSnapshot {
    debug!("close_cart command");
    store.update(|s| s.close_cart());
    store.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::view_product;
    use crate::error::ErrorCode;
    use bazaar_core::{Catalog, Panel};

    fn store() -> StoreState {
        StoreState::new(Storefront::new(Catalog::default_catalog()))
    }

    #[test]
    fn test_add_two_then_remove_first() {
        let store = store();
        add_to_cart(&store, 1).unwrap();
        let cart = add_to_cart(&store, 2).unwrap();
        assert_eq!(cart.count, 2);
        assert_eq!(cart.total, Money::from_major(400));

        let cart = remove_from_cart(&store, 0);
        assert_eq!(cart.count, 1);
        assert_eq!(cart.entries[0].product.id, 2);
        assert_eq!(cart.total, Money::from_major(250));
    }

    #[test]
    fn test_duplicate_adds_are_separate_entries() {
        let store = store();
        add_to_cart(&store, 3).unwrap();
        let cart = add_to_cart(&store, 3).unwrap();
        assert_eq!(cart.count, 2);
        assert_eq!(cart.total, Money::from_major(2400));
    }

    #[test]
    fn test_remove_out_of_range_is_silent() {
        let store = store();
        add_to_cart(&store, 1).unwrap();

        let cart = remove_from_cart(&store, 5);
        assert_eq!(cart.count, 1);
        assert_eq!(get_cart(&store), cart);
    }

    #[test]
    fn test_add_unknown_product() {
        let store = store();
        let err = add_to_cart(&store, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&store).count, 0);
    }

    #[test]
    fn test_add_selected_returns_to_catalog() {
        let store = store();
        let err = add_selected_to_cart(&store).unwrap_err();
        assert_eq!(err.code, ErrorCode::NothingSelected);

        view_product(&store, 4).unwrap();
        let cart = add_selected_to_cart(&store).unwrap();
        assert_eq!(cart.entries[0].product.id, 4);
        assert_eq!(store.snapshot().panel, Panel::Catalog);
    }

    #[test]
    fn test_toggle_and_close() {
        let store = store();
        view_product(&store, 1).unwrap();

        let snap = toggle_cart(&store);
        assert_eq!(snap.panel, Panel::Cart);
        assert!(snap.selected.is_none());

        let snap = close_cart(&store);
        assert_eq!(snap.panel, Panel::Catalog);
        assert!(!snap.cart_visible);
    }

    #[test]
    fn test_cart_response_shape() {
        let store = store();
        let cart = add_to_cart(&store, 1).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["count"], 1);
        assert!(json["entries"][0]["addedAt"].is_string());
    }
}
