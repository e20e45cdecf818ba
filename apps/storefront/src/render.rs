//! # Document Rendering
//!
//! Turns a `StoreSnapshot` into the storefront HTML page.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <html lang="ar" dir="rtl">                                             │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │  متجر محمد الصالحي                               [السلة (2)]      │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │  exactly one of:                                                  │  │
//! │  │    • catalog grid     (Panel::Catalog)                            │  │
//! │  │    • product detail   (Panel::Detail)                             │  │
//! │  │    • cart lines, total, checkout button   (Panel::Cart)           │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every button carries a `data-command` attribute holding the shell line
//! that performs the same action.

use askama::Template;

use bazaar_core::{Catalog, CartEntry, Panel, Product, StoreSnapshot};

use crate::state::StoreConfig;

/// A product as shown on a card or in the detail panel.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ProductView {
    fn new(product: &Product, config: &StoreConfig) -> Self {
        ProductView {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: config.format_price(product.price),
            image: product.image.clone(),
        }
    }
}

/// One cart line; `index` is what the remove button sends back.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub index: usize,
    pub name: String,
    pub price: String,
}

impl CartLineView {
    fn new(index: usize, entry: &CartEntry, config: &StoreConfig) -> Self {
        CartLineView {
            index,
            name: entry.product.name.clone(),
            price: config.format_price(entry.price()),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub lang: String,
    pub dir: &'static str,
    pub store_name: String,
    pub cart_count: usize,
    pub panel: Panel,
    pub cards: Vec<ProductView>,
    pub detail: Option<ProductView>,
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub processing: bool,
}

impl PageTemplate {
    /// Builds the view model for `snapshot`. Only the visible panel's data
    /// is filled in.
    pub fn new(config: &StoreConfig, catalog: &Catalog, snapshot: &StoreSnapshot) -> Self {
        let cards = match snapshot.panel {
            Panel::Catalog => catalog
                .products()
                .iter()
                .map(|p| ProductView::new(p, config))
                .collect(),
            _ => Vec::new(),
        };

        let detail = match snapshot.panel {
            Panel::Detail => snapshot.selected.as_ref().map(|p| ProductView::new(p, config)),
            _ => None,
        };

        let lines = match snapshot.panel {
            Panel::Cart => snapshot
                .cart
                .iter()
                .enumerate()
                .map(|(i, entry)| CartLineView::new(i, entry, config))
                .collect(),
            _ => Vec::new(),
        };

        PageTemplate {
            lang: config.locale.clone(),
            dir: config.direction.as_attr(),
            store_name: config.store_name.clone(),
            cart_count: snapshot.cart_count,
            panel: snapshot.panel,
            cards,
            detail,
            lines,
            total: config.format_price(snapshot.total),
            processing: snapshot.checkout.is_processing(),
        }
    }
}

/// Renders the whole page for `snapshot`.
pub fn render_page(
    config: &StoreConfig,
    catalog: &Catalog,
    snapshot: &StoreSnapshot,
) -> Result<String, askama::Error> {
    PageTemplate::new(config, catalog, snapshot).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Storefront;

    fn render(store: &Storefront) -> String {
        render_page(&StoreConfig::default(), store.catalog(), &store.snapshot()).unwrap()
    }

    fn panels_in(html: &str) -> usize {
        html.matches("data-panel=").count()
    }

    #[test]
    fn test_catalog_page() {
        let store = Storefront::new(Catalog::default_catalog());
        let html = render(&store);

        assert!(html.contains(r#"lang="ar""#));
        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains("متجر محمد الصالحي"));
        assert!(html.contains(r#"data-panel="catalog""#));
        assert_eq!(panels_in(&html), 1);
        assert_eq!(html.matches("عرض التفاصيل").count(), 4);
        assert!(html.contains("150 ريال"));
        assert!(html.contains(r#"data-command="view 3""#));
    }

    #[test]
    fn test_detail_page() {
        let mut store = Storefront::new(Catalog::default_catalog());
        store.view_product(2).unwrap();
        let html = render(&store);

        assert!(html.contains(r#"data-panel="detail""#));
        assert_eq!(panels_in(&html), 1);
        assert!(html.contains("إضافة إلى السلة"));
        assert!(html.contains("250 ريال"));
        assert!(!html.contains("عرض التفاصيل"));
    }

    #[test]
    fn test_cart_page() {
        let mut store = Storefront::new(Catalog::default_catalog());
        store.add_to_cart(1).unwrap();
        store.add_to_cart(1).unwrap();
        store.toggle_cart();
        let html = render(&store);

        assert!(html.contains(r#"data-panel="cart""#));
        assert_eq!(panels_in(&html), 1);
        assert_eq!(html.matches("class=\"cart-line\"").count(), 2);
        assert!(html.contains(r#"data-command="remove 1""#));
        assert!(html.contains("300 ريال"));
        assert!(html.contains("إتمام الشراء"));
        assert!(html.contains(r#"<span class="cart-badge">2</span>"#));
    }

    #[test]
    fn test_empty_cart_has_no_checkout_button() {
        let mut store = Storefront::new(Catalog::default_catalog());
        store.toggle_cart();
        let html = render(&store);

        assert!(html.contains("السلة فارغة"));
        assert!(!html.contains("إتمام الشراء"));
    }

    #[test]
    fn test_processing_disables_checkout() {
        let mut store = Storefront::new(Catalog::default_catalog());
        store.add_to_cart(4).unwrap();
        store.toggle_cart();
        store.begin_checkout().unwrap();
        let html = render(&store);

        assert!(html.contains("جاري المعالجة..."));
        assert!(html.contains("disabled"));
        assert!(!html.contains("إتمام الشراء"));
    }

    #[test]
    fn test_ltr_config() {
        let store = Storefront::new(Catalog::default_catalog());
        let config = StoreConfig {
            locale: "en".into(),
            direction: crate::state::TextDirection::Ltr,
            ..StoreConfig::default()
        };
        let html = render_page(&config, store.catalog(), &store.snapshot()).unwrap();
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains(r#"dir="ltr""#));
    }
}
