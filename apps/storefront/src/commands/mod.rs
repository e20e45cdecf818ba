//! # Commands Module
//!
//! One function per user action. The shell (and any other event source)
//! calls these; they never touch the storefront except through `StoreState`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product list, detail view, back to catalog
//! ├── cart.rs      ◄─── Cart contents, add/remove, cart panel
//! └── checkout.rs  ◄─── Simulated checkout and cancel
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "remove 0"  (shell line, click, ...)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn remove_from_cart(                                                   │
//! │      store: &StoreState,     ◄── Shared state container                │
//! │      index: usize,           ◄── From the event                        │
//! │  ) -> CartResponse                                                      │
//! │         │                                                               │
//! │         │ store.update(|s| ...)  ──► watch subscribers re-render       │
//! │         ▼                                                               │
//! │  Caller receives a serializable DTO or an ApiError                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
