//! Seat reservation provider trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use common::AccountId;

/// Reserves seats for a purchase.
///
/// The provider is assumed to always succeed; it reports nothing back.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves `total_seats_to_allocate` seats for the given account.
    async fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: i64);
}

/// A reservation made by [`InMemorySeatReservationService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRecord {
    pub account_id: AccountId,
    pub seats: i64,
}

#[derive(Debug, Default)]
struct InMemorySeatingState {
    reservations: Vec<ReservationRecord>,
}

/// In-memory seat reservation provider that records every call.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemorySeatingState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every reservation made so far, oldest first.
    pub fn reservations(&self) -> Vec<ReservationRecord> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .clone()
    }

    /// Returns the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .len()
    }

    /// Returns the sum of all seats reserved.
    pub fn total_seats_reserved(&self) -> i64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .iter()
            .map(|r| r.seats)
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: i64) {
        tracing::debug!(%account_id, seats = total_seats_to_allocate, "seats reserved");

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.reservations.push(ReservationRecord {
            account_id,
            seats: total_seats_to_allocate,
        });
    }
}
