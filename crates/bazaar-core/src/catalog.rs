//! # Catalog
//!
//! The fixed list of purchasable products.
//!
//! The catalog is built once at startup and never changes afterwards: no
//! product is created or destroyed at runtime, and there is no search, filter,
//! sort, or pagination. Order is the order the products were given in, which
//! is the order the grid renders them.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_product;

/// An immutable, validated product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates `products` and builds a catalog.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if any product has a bad field
    /// - `CoreError::DuplicateProductId` if two products share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }

        Ok(Catalog { products })
    }

    /// The storefront's built-in product list.
    pub fn default_catalog() -> Self {
        // Known-valid literal data; skips validation so this stays infallible.
        Catalog {
            products: default_products(),
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: u32) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::default_catalog()
    }
}

fn default_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "قميص رجالي كلاسيكي",
            "قميص رجالي أنيق مصنوع من القطن عالي الجودة.",
            150,
            "https://example.com/images/shirt1.jpg",
        ),
        Product::new(
            2,
            "حذاء رجالي رسمي",
            "حذاء جلدي فاخر مناسب للمناسبات الرسمية.",
            250,
            "https://example.com/images/shoe1.jpg",
        ),
        Product::new(
            3,
            "بدلة رسمية",
            "بدلة رجالية فاخرة من الصوف الإيطالي.",
            1200,
            "https://example.com/images/suit1.jpg",
        ),
        Product::new(
            4,
            "ساعة يد كلاسيكية",
            "ساعة يد أنيقة بتصميم كلاسيكي.",
            800,
            "https://example.com/images/watch1.jpg",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
