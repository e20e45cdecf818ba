//! # Checkout Phases
//!
//! The checkout is a two-state machine. The delay between the two
//! transitions is owned by the app (a tokio task); this module only enforces
//! which transitions are legal.
//!
//! ```text
//!              begin()                     finish()
//!   ┌──────┐ ───────────► ┌────────────┐ ───────────► ┌──────┐
//!   │ Idle │              │ Processing │              │ Idle │
//!   └──────┘ ◄─────────── └────────────┘              └──────┘
//!              finish()      │      ▲
//!            (cancelled)     └──────┘
//!                          begin() ──► CheckoutInProgress
//! ```
//!
//! There is no failure state: a started checkout either completes or is
//! cancelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Checkout Phase
// =============================================================================

/// Where the checkout control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// Control enabled.
    #[default]
    Idle,
    /// Simulated payment running; control disabled.
    Processing,
}

impl CheckoutPhase {
    /// `Idle → Processing`.
    pub fn begin(&mut self) -> CoreResult<()> {
        match self {
            CheckoutPhase::Idle => {
                *self = CheckoutPhase::Processing;
                Ok(())
            }
            CheckoutPhase::Processing => Err(CoreError::CheckoutInProgress),
        }
    }

    /// `Processing → Idle`, used for both completion and cancellation.
    pub fn finish(&mut self) -> CoreResult<()> {
        match self {
            CheckoutPhase::Processing => {
                *self = CheckoutPhase::Idle;
                Ok(())
            }
            CheckoutPhase::Idle => Err(CoreError::CheckoutNotStarted),
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, CheckoutPhase::Processing)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Summary handed to the success notification. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Order reference (UUID v4).
    pub order_id: String,

    /// Number of cart entries that were purchased.
    pub item_count: usize,

    /// Amount charged.
    pub total: Money,

    /// When the simulated payment finished.
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(order_id: Uuid, item_count: usize, total: Money, completed_at: DateTime<Utc>) -> Self {
        Receipt {
            order_id: order_id.to_string(),
            item_count,
            total,
            completed_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_finish() {
        let mut phase = CheckoutPhase::default();
        assert!(!phase.is_processing());

        phase.begin().unwrap();
        assert!(phase.is_processing());

        phase.finish().unwrap();
        assert_eq!(phase, CheckoutPhase::Idle);
    }

    #[test]
    fn test_begin_is_not_reentrant() {
        let mut phase = CheckoutPhase::Idle;
        phase.begin().unwrap();
        assert_eq!(phase.begin(), Err(CoreError::CheckoutInProgress));
        assert!(phase.is_processing());
    }

    #[test]
    fn test_finish_without_begin() {
        let mut phase = CheckoutPhase::Idle;
        assert_eq!(phase.finish(), Err(CoreError::CheckoutNotStarted));
    }

    #[test]
    fn test_receipt_carries_order_id() {
        let id = Uuid::new_v4();
        let receipt = Receipt::new(id, 2, Money::from_major(400), Utc::now());
        assert_eq!(receipt.order_id, id.to_string());
        assert_eq!(receipt.total.major(), 400);
    }
}
