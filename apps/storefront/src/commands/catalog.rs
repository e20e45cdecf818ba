//! # Catalog Commands
//!
//! Browsing: list every product, open one in the detail panel, go back.
//!
//! ```text
//! ┌──────────────┐  view_product(id)  ┌──────────────┐
//! │   Catalog    │───────────────────►│    Detail    │
//! │   (grid)     │◄───────────────────│   (one item) │
//! └──────────────┘  clear_selection   └──────────────┘
//! ```

use tracing::debug;

use bazaar_core::{Product, StoreSnapshot};

use crate::error::ApiError;
use crate::state::StoreState;

/// Lists the full catalog in display order.
pub fn list_products(store: &StoreState) -> Vec<Product> {
    debug!("list_products command");
    store.with_store(|s| s.catalog().products().to_vec())
}

/// Opens the detail panel for a product.
///
/// ## Errors
/// `NOT_FOUND` for an id outside the catalog; the current view is kept.
pub fn view_product(store: &StoreState, product_id: u32) -> Result<Product, ApiError> {
    debug!(product_id, "view_product command");
    let product = store.update(|s| s.view_product(product_id).cloned())?;
    Ok(product)
}

/// Back to the catalog grid. The cart is not touched.
pub fn clear_selection(store: &StoreState) -> StoreSnapshot {
    debug!("clear_selection command");
    store.update(|s| s.clear_selection());
    store.snapshot()
}
