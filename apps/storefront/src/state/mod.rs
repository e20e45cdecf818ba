//! # State Module
//!
//! Manages application state for the storefront.
//!
//! Each command takes only the state it needs, the same as before: the
//! storefront container, the checkout runner, or the read-only config.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │  StoreState  │  │  CheckoutState   │  │   StoreConfig    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │◄─┤  tokio task      │  │  store_name      │          │
//! │  │  Storefront  │  │  cancel channel  │  │  locale, dir     │          │
//! │  │  >>          │  │  notifier        │  │  checkout delay  │          │
//! │  │  + watch tx  │  │                  │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one Mutex, snapshot published under the lock            │
//! │  • CheckoutState: holds at most one task handle                        │
//! │  • StoreConfig: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod checkout;
mod config;
mod store;

pub use checkout::{
    ChannelNotifier, CheckoutNotifier, CheckoutOutcome, CheckoutState, LogNotifier,
};
pub use config::{StoreConfig, TextDirection, MAX_CHECKOUT_DELAY_MS};
pub use store::StoreState;
