//! Turns raw ticket requests into typed ones.

use crate::error::InvalidPurchase;
use crate::ticket::{RawTicketTypeRequest, TicketTypeRequest};

/// Normalizes every raw request, in order.
///
/// Stops at the first malformed entry; no partial list is ever returned.
pub(crate) fn normalize(
    raw_requests: &[RawTicketTypeRequest],
) -> Result<Vec<TicketTypeRequest>, InvalidPurchase> {
    raw_requests
        .iter()
        .map(|raw| TicketTypeRequest::from_raw(raw).map_err(InvalidPurchase::from))
        .collect()
}
