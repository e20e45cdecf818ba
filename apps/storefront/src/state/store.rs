//! # Store State
//!
//! The reactive state container: one `Storefront` behind a mutex, plus a
//! `watch` channel that carries the latest snapshot to subscribers.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StoreState::update(f)                                │
//! │                                                                         │
//! │  command ──► lock Storefront ──► f(&mut store) ──► snapshot()          │
//! │                                                        │                │
//! │                                 changed? ──── no ──────┤ (nothing sent) │
//! │                                     │                  │                │
//! │                                    yes                 ▼                │
//! │                                     └──► watch::Sender::send ──► rx... │
//! │                                                                         │
//! │  The snapshot is published while the lock is held, so subscribers      │
//! │  never see updates out of order.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Arc<Mutex<Storefront>>`: commands and the checkout task both mutate the
//! store; each mutation is short and synchronous.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use bazaar_core::{StoreSnapshot, Storefront};

/// Shared handle to the storefront state.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Storefront>>,
    updates: Arc<watch::Sender<StoreSnapshot>>,
}

impl StoreState {
    pub fn new(storefront: Storefront) -> Self {
        let (updates, _) = watch::channel(storefront.snapshot());
        StoreState {
            store: Arc::new(Mutex::new(storefront)),
            updates: Arc::new(updates),
        }
    }

    /// Executes a function with read access to the storefront.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = store_state.with_store(|s| s.total_price());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Storefront) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access, then notifies subscribers if
    /// the visible state changed.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.update(|s| s.add_to_cart(1))?;
    /// ```
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Storefront) -> R,
    {
        let mut store = self.lock();
        let result = f(&mut store);

        let snapshot = store.snapshot();
        self.updates.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });

        result
    }

    /// Receiver that wakes on every published change.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.updates.subscribe()
    }

    /// Current state as an owned snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.with_store(Storefront::snapshot)
    }

    fn lock(&self) -> MutexGuard<'_, Storefront> {
        // A panic inside a closure leaves the store as the closure left it;
        // the storefront has no multi-step invariants that could be half-applied.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
