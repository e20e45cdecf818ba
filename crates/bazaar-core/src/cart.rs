//! # Cart
//!
//! The ordered list of products the shopper intends to buy.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Click "إضافة إلى السلة" ──► add()        ──► entries.push(copy)       │
//! │                                                                         │
//! │  Click "حذف" on row i ────► remove_at(i)  ──► entries.remove(i)        │
//! │                                              (bad i: nothing happens)  │
//! │                                                                         │
//! │  Checkout completes ──────► clear()       ──► entries.clear()          │
//! │                                                                         │
//! │  Render ──────────────────► total()       ──► Σ entry.price            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No quantity field: adding the same product twice yields two entries
//! - No maximum size, no stock check
//! - Entries have no identity beyond their position
//! - `total()` is recomputed on every call, never cached

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartEntry, Product};

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a copy of `product`.
    pub fn add(&mut self, product: &Product) {
        self.entries.push(CartEntry::from_product(product));
    }

    /// Removes the entry at `index`, returning it.
    ///
    /// An out-of-range index leaves the cart untouched and returns `None`.
    /// Remaining entries keep their relative order.
    pub fn remove_at(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Like [`Cart::remove_at`], but reports a bad index as an error.
    pub fn try_remove_at(&mut self, index: usize) -> CoreResult<CartEntry> {
        let len = self.entries.len();
        self.remove_at(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of all entry prices.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::price).sum()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (the header badge count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            "",
            price,
            format!("https://example.com/{}.jpg", id),
        )
    }

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.entries().iter().map(|e| e.product.id).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 150));
        cart.add(&test_product(2, 250));

        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.total().major(), 400);
    }

    #[test]
    fn test_duplicate_adds_are_separate_entries() {
        let mut cart = Cart::new();
        let shirt = test_product(1, 150);
        cart.add(&shirt);
        cart.add(&shirt);
        cart.add(&shirt);

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total().major(), 450);
    }

    #[test]
    fn test_length_and_total_track_every_add() {
        let prices = [150, 250, 1200, 800, 0, 150, 250];
        let mut cart = Cart::new();
        let mut expected = Money::zero();

        for (n, price) in prices.iter().enumerate() {
            cart.add(&test_product(n as u32, *price));
            expected += Money::from_major(*price);

            assert_eq!(cart.len(), n + 1);
            assert_eq!(cart.total(), expected);
        }
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let mut cart = Cart::new();
        for id in 1..=5 {
            cart.add(&test_product(id, 10));
        }

        let removed = cart.remove_at(2).unwrap();
        assert_eq!(removed.product.id, 3);
        assert_eq!(ids(&cart), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_remove_at_with_duplicates_removes_only_that_position() {
        let mut cart = Cart::new();
        let shirt = test_product(1, 150);
        let shoes = test_product(2, 250);
        cart.add(&shirt);
        cart.add(&shoes);
        cart.add(&shirt);

        cart.remove_at(2);
        assert_eq!(ids(&cart), vec![1, 2]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 150));

        assert!(cart.remove_at(1).is_none());
        assert!(cart.remove_at(usize::MAX).is_none());
        assert_eq!(cart.len(), 1);

        assert!(Cart::new().remove_at(0).is_none());
    }

    #[test]
    fn test_try_remove_at_reports_range() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 150));

        assert_eq!(
            cart.try_remove_at(4),
            Err(CoreError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert!(cart.try_remove_at(0).is_ok());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_two_then_remove_first() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 150));
        cart.add(&test_product(2, 250));
        assert_eq!(cart.total().major(), 400);

        cart.remove_at(0);
        assert_eq!(ids(&cart), vec![2]);
        assert_eq!(cart.total().major(), 250);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 150));
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }
}
