//! # Checkout Commands
//!
//! Starts and cancels the simulated checkout. The purchase itself is a
//! fixed delay run by `CheckoutState`; these commands only trigger it.

use tracing::debug;

use bazaar_core::StoreSnapshot;

use crate::error::ApiError;
use crate::state::{CheckoutOutcome, CheckoutState, StoreState};

/// The cart panel's checkout button.
///
/// Returns immediately with the checkout in `Processing`; the cart is
/// emptied when the delay ends.
///
/// ## Errors
/// - `EMPTY_CART`: the button is not shown for an empty cart
/// - `CHECKOUT_IN_PROGRESS`: the button is disabled while processing
pub fn checkout(store: &StoreState, runner: &CheckoutState) -> Result<StoreSnapshot, ApiError> {
    debug!("checkout command");
    runner.start(store)?;
    Ok(store.snapshot())
}

/// Cancels a processing checkout and reports how it ended.
pub async fn cancel_checkout(runner: &CheckoutState) -> Option<CheckoutOutcome> {
    debug!("cancel_checkout command");
    runner.cancel().await
}
