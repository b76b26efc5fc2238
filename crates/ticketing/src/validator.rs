//! Purchase-wide rules: who is buying, and how much.

use common::AccountId;
use serde_json::Value;

use crate::error::InvalidPurchase;
use crate::ticket::TicketTypeRequest;

/// Most tickets, of all types combined, a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 20;

/// Accepts any positive JSON integer as an account id.
///
/// Floats are rejected even when they have no fractional part.
pub(crate) fn validate_account_id(raw: &Value) -> Result<AccountId, InvalidPurchase> {
    raw.as_i64()
        .and_then(AccountId::new)
        .ok_or(InvalidPurchase::InvalidAccountId)
}

/// Fails if the requests add up to more than [`MAX_TICKETS_PER_PURCHASE`].
pub(crate) fn ensure_within_ticket_limit(
    requests: &[TicketTypeRequest],
) -> Result<(), InvalidPurchase> {
    // Summed in i128 so no mix of quantities can overflow
    let total: i128 = requests
        .iter()
        .map(|request| i128::from(request.no_of_tickets()))
        .sum();

    if total > i128::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(InvalidPurchase::TooManyTickets);
    }

    Ok(())
}
