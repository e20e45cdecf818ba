//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │     Panel       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  product (copy) │   │  Catalog        │       │
//! │  │  name           │──►│  added_at       │   │  Detail         │       │
//! │  │  description    │   │                 │   │  Cart           │       │
//! │  │  price (Money)  │   │  identity =     │   └─────────────────┘       │
//! │  │  image (URL)    │   │  list position  │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A cart entry holds a full copy of the product taken when it was added.
//! Two adds of the same product are two independent entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog id.
    pub id: u32,

    /// Display name shown on the card and in the cart.
    pub name: String,

    /// Longer text shown on the card and detail panel.
    pub description: String,

    /// Unit price.
    pub price: Money,

    /// Absolute image URL. No fallback if it fails to load.
    pub image: String,
}

impl Product {
    /// Builds a product priced in whole riyals.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price_major: i64,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            description: description.into(),
            price: Money::from_major(price_major),
            image: image.into(),
        }
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line of the cart: a frozen copy of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Product data at the time of adding.
    pub product: Product,

    /// When this entry was appended.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Copies `product` into a new entry stamped with the current time.
    pub fn from_product(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            added_at: Utc::now(),
        }
    }

    /// Price of this entry.
    #[inline]
    pub fn price(&self) -> Money {
        self.product.price
    }
}

// =============================================================================
// Panel
// =============================================================================

/// The one panel currently visible in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Grid of product cards.
    Catalog,
    /// Detail view of the selected product.
    Detail,
    /// Cart contents with total and checkout control.
    Cart,
}

impl Default for Panel {
    fn default() -> Self {
        Panel::Catalog
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_prices_in_major_units() {
        let p = Product::new(7, "x", "y", 150, "https://example.com/x.jpg");
        assert_eq!(p.price.minor(), 15000);
    }

    #[test]
    fn test_cart_entry_copies_product() {
        let mut p = Product::new(1, "قميص", "", 150, "https://example.com/a.jpg");
        let entry = CartEntry::from_product(&p);
        p.price = Money::from_major(1);

        assert_eq!(entry.price().major(), 150);
        assert_eq!(entry.product.id, 1);
    }

    #[test]
    fn test_panel_default_and_serialization() {
        assert_eq!(Panel::default(), Panel::Catalog);
        assert_eq!(serde_json::to_string(&Panel::Detail).unwrap(), "\"detail\"");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let p = Product::new(2, "حذاء", "جلد", 250, "https://example.com/shoe1.jpg");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["price"], 25000);
    }
}
