//! Price and seat totals for a validated purchase.

use crate::error::InvalidPurchase;
use crate::ticket::{TicketType, TicketTypeRequest};

const ADULT_TICKET_PRICE: i64 = 20;
const CHILD_TICKET_PRICE: i64 = 10;
const INFANT_TICKET_PRICE: i64 = 0;

fn unit_price(ticket_type: TicketType) -> i64 {
    match ticket_type {
        TicketType::Adult => ADULT_TICKET_PRICE,
        TicketType::Child => CHILD_TICKET_PRICE,
        TicketType::Infant => INFANT_TICKET_PRICE,
    }
}

/// Infants sit on an accompanying adult's lap.
fn seats_per_ticket(ticket_type: TicketType) -> i64 {
    match ticket_type {
        TicketType::Adult | TicketType::Child => 1,
        TicketType::Infant => 0,
    }
}

/// What a purchase costs and how many seats it occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PurchaseTotals {
    pub total_price: i64,
    pub total_seats: i64,
}

/// Sums price and seats over all requests.
///
/// Accumulates in i128 so the result does not depend on request order;
/// a total that does not fit in i64 is only reachable with mixed-sign
/// quantities far past the ticket ceiling and is reported as such.
pub(crate) fn calculate_totals(
    requests: &[TicketTypeRequest],
) -> Result<PurchaseTotals, InvalidPurchase> {
    let (price, seats) = requests.iter().fold((0i128, 0i128), |(price, seats), request| {
        let quantity = i128::from(request.no_of_tickets());
        let ticket_type = request.ticket_type();
        (
            price + quantity * i128::from(unit_price(ticket_type)),
            seats + quantity * i128::from(seats_per_ticket(ticket_type)),
        )
    });

    Ok(PurchaseTotals {
        total_price: i64::try_from(price).map_err(|_| InvalidPurchase::TooManyTickets)?,
        total_seats: i64::try_from(seats).map_err(|_| InvalidPurchase::TooManyTickets)?,
    })
}
