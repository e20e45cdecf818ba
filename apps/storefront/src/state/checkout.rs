//! # Checkout State
//!
//! Runs the simulated checkout as a cancellable tokio task.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Task                                        │
//! │                                                                         │
//! │  start()                                                                │
//! │    ├── store.update(begin_checkout)   Idle → Processing (control off)  │
//! │    └── tokio::spawn(run_checkout)                                       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │          select! ──┬── sleep(delay) ──► complete_checkout               │
//! │                    │                     ├── cart cleared               │
//! │                    │                     ├── cart panel hidden          │
//! │                    │                     ├── Processing → Idle          │
//! │                    │                     └── notifier.completed(receipt)│
//! │                    │                                                    │
//! │                    └── cancel_rx ──────► cancel_checkout                │
//! │                                          ├── Processing → Idle          │
//! │                                          └── notifier.cancelled()       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Other controls stay live while the task sleeps. Whatever is in the cart
//! when the delay ends is what gets cleared.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use bazaar_core::Receipt;

use crate::error::ApiError;
use crate::state::StoreState;

// =============================================================================
// Notifier
// =============================================================================

/// Receives the user-facing checkout notifications.
pub trait CheckoutNotifier: Send + Sync {
    /// The purchase went through (the success alert).
    fn checkout_completed(&self, receipt: &Receipt);

    /// The checkout was cancelled before the delay ended.
    fn checkout_cancelled(&self) {}
}

/// Notifier that only writes log lines.
pub struct LogNotifier;

impl CheckoutNotifier for LogNotifier {
    fn checkout_completed(&self, receipt: &Receipt) {
        info!(
            order_id = %receipt.order_id,
            items = receipt.item_count,
            total = %receipt.total,
            "تم إتمام عملية الشراء بنجاح!"
        );
    }

    fn checkout_cancelled(&self) {
        info!("Checkout cancelled");
    }
}

/// Logs like [`LogNotifier`] and forwards each receipt to whoever holds
/// the receiving end, so the success notice reaches the user's screen.
pub struct ChannelNotifier {
    receipts: mpsc::UnboundedSender<Receipt>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Receipt>) {
        let (receipts, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { receipts }, rx)
    }
}

impl CheckoutNotifier for ChannelNotifier {
    fn checkout_completed(&self, receipt: &Receipt) {
        LogNotifier.checkout_completed(receipt);
        if self.receipts.send(receipt.clone()).is_err() {
            debug!(order_id = %receipt.order_id, "No one listening for checkout notices");
        }
    }

    fn checkout_cancelled(&self) {
        LogNotifier.checkout_cancelled();
    }
}

// =============================================================================
// Checkout State
// =============================================================================

/// How a checkout task ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed(Receipt),
    Cancelled,
}

struct CheckoutHandle {
    cancel_tx: mpsc::Sender<()>,
    task: JoinHandle<CheckoutOutcome>,
}

/// Owns the running checkout task, if any.
pub struct CheckoutState {
    delay: Duration,
    notifier: Arc<dyn CheckoutNotifier>,
    running: Mutex<Option<CheckoutHandle>>,
}

impl CheckoutState {
    pub fn new(delay: Duration) -> Self {
        Self::with_notifier(delay, Arc::new(LogNotifier))
    }

    pub fn with_notifier(delay: Duration, notifier: Arc<dyn CheckoutNotifier>) -> Self {
        CheckoutState {
            delay,
            notifier,
            running: Mutex::new(None),
        }
    }

    /// Starts a checkout. Must be called inside a tokio runtime.
    ///
    /// ## Errors
    /// - `EMPTY_CART` when there is nothing to buy
    /// - `CHECKOUT_IN_PROGRESS` while a previous checkout is processing
    pub fn start(&self, store: &StoreState) -> Result<(), ApiError> {
        store.update(|s| s.begin_checkout())?;
        info!(delay_ms = self.delay.as_millis() as u64, "Checkout started");

        let (cancel_tx, cancel_rx) = mpsc::channel(1);
        let task = tokio::spawn(run_checkout(
            store.clone(),
            self.delay,
            self.notifier.clone(),
            cancel_rx,
        ));

        // A previous handle here belongs to a finished task; dropping it detaches nothing live.
        *self.slot() = Some(CheckoutHandle { cancel_tx, task });
        Ok(())
    }

    /// Cancels the running checkout and waits for the task to stop.
    ///
    /// Returns what actually happened: `Completed` if the delay ran out first,
    /// `None` if no checkout was started.
    pub async fn cancel(&self) -> Option<CheckoutOutcome> {
        let handle = self.slot().take()?;
        // The task may already be done; then the receiver is gone and the send fails.
        let _ = handle.cancel_tx.send(()).await;
        join(handle.task).await
    }

    /// Waits for the running checkout to finish on its own.
    pub async fn wait(&self) -> Option<CheckoutOutcome> {
        let handle = self.slot().take()?;
        join(handle.task).await
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<CheckoutHandle>> {
        self.running.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn join(task: JoinHandle<CheckoutOutcome>) -> Option<CheckoutOutcome> {
    match task.await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!(error = %e, "Checkout task failed");
            None
        }
    }
}

async fn run_checkout(
    store: StoreState,
    delay: Duration,
    notifier: Arc<dyn CheckoutNotifier>,
    mut cancel_rx: mpsc::Receiver<()>,
) -> CheckoutOutcome {
    tokio::select! {
        _ = tokio::time::sleep(delay) => {
            match store.update(|s| s.complete_checkout(Uuid::new_v4(), Utc::now())) {
                Ok(receipt) => {
                    info!(order_id = %receipt.order_id, total = %receipt.total, "Checkout completed");
                    notifier.checkout_completed(&receipt);
                    CheckoutOutcome::Completed(receipt)
                }
                Err(e) => {
                    error!(error = %e, "Checkout could not complete");
                    CheckoutOutcome::Cancelled
                }
            }
        }

        // A dropped sender is not a cancel: the sleep arm still completes the purchase.
        Some(()) = cancel_rx.recv() => {
            if let Err(e) = store.update(|s| s.cancel_checkout()) {
                error!(error = %e, "Checkout could not be cancelled");
            }
            notifier.checkout_cancelled();
            CheckoutOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bazaar_core::{Catalog, CheckoutPhase, Panel, Storefront};

    #[derive(Default)]
    struct RecordingNotifier {
        receipts: Mutex<Vec<Receipt>>,
        cancels: Mutex<usize>,
    }

    impl CheckoutNotifier for RecordingNotifier {
        fn checkout_completed(&self, receipt: &Receipt) {
            self.receipts.lock().unwrap().push(receipt.clone());
        }

        fn checkout_cancelled(&self) {
            *self.cancels.lock().unwrap() += 1;
        }
    }

    fn setup() -> (StoreState, CheckoutState, Arc<RecordingNotifier>) {
        let store = StoreState::new(Storefront::new(Catalog::default_catalog()));
        let notifier = Arc::new(RecordingNotifier::default());
        let checkout = CheckoutState::with_notifier(Duration::from_millis(1000), notifier.clone());
        (store, checkout, notifier)
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_clears_cart_after_delay() {
        let (store, checkout, notifier) = setup();
        store.update(|s| s.add_to_cart(1)).unwrap();
        store.update(|s| s.add_to_cart(2)).unwrap();
        store.update(|s| s.toggle_cart());

        checkout.start(&store).unwrap();
        assert_eq!(store.snapshot().checkout, CheckoutPhase::Processing);

        let outcome = checkout.wait().await;
        let receipt = match outcome {
            Some(CheckoutOutcome::Completed(receipt)) => receipt,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(receipt.total.major(), 400);

        let snap = store.snapshot();
        assert_eq!(snap.cart_count, 0);
        assert!(!snap.cart_visible);
        assert_eq!(snap.panel, Panel::Catalog);
        assert_eq!(snap.checkout, CheckoutPhase::Idle);
        assert_eq!(notifier.receipts.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_control_disabled_for_whole_delay() {
        let (store, checkout, _) = setup();
        store.update(|s| s.add_to_cart(3)).unwrap();
        checkout.start(&store).unwrap();

        tokio::time::advance(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;

        assert_eq!(store.snapshot().checkout, CheckoutPhase::Processing);
        assert_eq!(store.snapshot().cart_count, 1);
        let err = checkout.start(&store).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutInProgress);

        checkout.wait().await;
        assert_eq!(store.snapshot().checkout, CheckoutPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_cart_is_rejected() {
        let (store, checkout, _) = setup();
        let err = checkout.start(&store).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert!(checkout.wait().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_cart() {
        let (store, checkout, notifier) = setup();
        store.update(|s| s.add_to_cart(4)).unwrap();
        store.update(|s| s.toggle_cart());
        checkout.start(&store).unwrap();

        let outcome = checkout.cancel().await;
        assert_eq!(outcome, Some(CheckoutOutcome::Cancelled));

        let snap = store.snapshot();
        assert_eq!(snap.checkout, CheckoutPhase::Idle);
        assert_eq!(snap.cart_count, 1);
        assert_eq!(snap.panel, Panel::Cart);
        assert_eq!(*notifier.cancels.lock().unwrap(), 1);
        assert!(notifier.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_reports_completion() {
        let (store, checkout, _) = setup();
        store.update(|s| s.add_to_cart(1)).unwrap();
        checkout.start(&store).unwrap();

        tokio::time::sleep(Duration::from_millis(1500)).await;

        let outcome = checkout.cancel().await;
        assert!(matches!(outcome, Some(CheckoutOutcome::Completed(_))));
        assert_eq!(store.snapshot().cart_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_runner_still_completes() {
        let (store, checkout, notifier) = setup();
        store.update(|s| s.add_to_cart(2)).unwrap();
        checkout.start(&store).unwrap();

        drop(checkout);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let snap = store.snapshot();
        assert_eq!(snap.cart_count, 0);
        assert_eq!(snap.checkout, CheckoutPhase::Idle);
        assert_eq!(notifier.receipts.lock().unwrap().len(), 1);
        assert_eq!(*notifier.cancels.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_channel_notifier_forwards_receipt() {
        let store = StoreState::new(Storefront::new(Catalog::default_catalog()));
        let (notifier, mut receipts) = ChannelNotifier::new();
        let checkout = CheckoutState::with_notifier(Duration::from_millis(1000), Arc::new(notifier));
        store.update(|s| s.add_to_cart(1)).unwrap();
        checkout.start(&store).unwrap();

        let receipt = receipts.recv().await.unwrap();
        assert_eq!(receipt.item_count, 1);
        assert_eq!(receipt.total.major(), 150);
        assert!(matches!(checkout.wait().await, Some(CheckoutOutcome::Completed(r)) if r == receipt));
    }

    #[tokio::test(start_paused = true)]
    async fn test_adds_during_processing_are_cleared() {
        let (store, checkout, _) = setup();
        store.update(|s| s.add_to_cart(1)).unwrap();
        checkout.start(&store).unwrap();

        store.update(|s| s.add_to_cart(2)).unwrap();
        store.update(|s| s.add_to_cart(3)).unwrap();

        match checkout.wait().await {
            Some(CheckoutOutcome::Completed(receipt)) => assert_eq!(receipt.item_count, 3),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(store.snapshot().cart_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_processing_then_idle() {
        let (store, checkout, _) = setup();
        store.update(|s| s.add_to_cart(1)).unwrap();
        let mut rx = store.subscribe();

        checkout.start(&store).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().checkout, CheckoutPhase::Processing);

        rx.changed().await.unwrap();
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.checkout, CheckoutPhase::Idle);
        assert_eq!(snap.cart_count, 0);
    }
}
