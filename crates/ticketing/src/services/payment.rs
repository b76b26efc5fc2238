//! Payment provider trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use common::AccountId;

/// Takes payment for a purchase.
///
/// The provider is assumed to always succeed; it reports nothing back.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charges `total_amount_to_pay` to the given account.
    async fn make_payment(&self, account_id: AccountId, total_amount_to_pay: i64);
}

/// A payment taken by [`InMemoryTicketPaymentService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRecord {
    pub account_id: AccountId,
    pub amount: i64,
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<PaymentRecord>,
}

/// In-memory payment provider that records every call.
///
/// Clones share the same record, so a test can keep one handle and give
/// the other to a [`TicketService`](crate::TicketService).
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryTicketPaymentService {
    /// Creates a new in-memory payment provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every payment taken so far, oldest first.
    pub fn payments(&self) -> Vec<PaymentRecord> {
        self.read().payments.clone()
    }

    /// Returns the number of payments taken.
    pub fn payment_count(&self) -> usize {
        self.read().payments.len()
    }

    /// Returns the sum of all amounts charged.
    pub fn total_charged(&self) -> i64 {
        self.read().payments.iter().map(|p| p.amount).sum()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, InMemoryPaymentState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryTicketPaymentService {
    async fn make_payment(&self, account_id: AccountId, total_amount_to_pay: i64) {
        tracing::debug!(%account_id, amount = total_amount_to_pay, "payment taken");

        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .push(PaymentRecord {
                account_id,
                amount: total_amount_to_pay,
            });
    }
}
