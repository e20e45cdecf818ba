//! # Bazaar Storefront Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Storefront                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Event Source                                │  │
//! │  │  stdin lines: view 1, add, cart, remove 0, checkout, render ...  │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the tokio runtime, reports startup errors │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Logging, config, catalog, state, shell           │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► view_product, add_to_cart, checkout, ...         │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► StoreState, CheckoutState, StoreConfig           │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 stdout: replies and rendered HTML                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted; the cart lives only as long as the process.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match bazaar_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront stopped with an error");
            ExitCode::FAILURE
        }
    }
}
