//! The ticket purchasing entry point.

use serde_json::Value;

use crate::error::InvalidPurchase;
use crate::normalizer::normalize;
use crate::pricing::calculate_totals;
use crate::services::{SeatReservationService, TicketPaymentService};
use crate::ticket::RawTicketTypeRequest;
use crate::validator::{ensure_within_ticket_limit, validate_account_id};

/// Validates ticket purchases and hands the valid ones to the payment and
/// seat reservation providers.
///
/// Holds no state of its own, so one instance can serve any number of
/// independent purchases.
pub struct TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    payment: P,
    reservation: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a ticket service backed by the given providers.
    pub fn new(payment: P, reservation: R) -> Self {
        Self {
            payment,
            reservation,
        }
    }

    /// Buys tickets for an account.
    ///
    /// Rules are checked in this order, and the first one broken decides
    /// the error:
    /// 1. the account id is a positive integer
    /// 2. each request, in order, has a known `type` and an integer
    ///    `noOfTickets`
    /// 3. at most [`MAX_TICKETS_PER_PURCHASE`] tickets in total
    ///
    /// On success the account is charged and then its seats are reserved.
    /// On any failure neither provider is called.
    ///
    /// [`MAX_TICKETS_PER_PURCHASE`]: crate::MAX_TICKETS_PER_PURCHASE
    #[tracing::instrument(skip_all, fields(account_id = tracing::field::Empty))]
    pub async fn purchase_tickets<I>(
        &self,
        account_id: impl Into<Value>,
        ticket_type_requests: I,
    ) -> Result<(), InvalidPurchase>
    where
        I: IntoIterator,
        I::Item: Into<RawTicketTypeRequest>,
    {
        let raw_account_id = account_id.into();
        let raw_requests: Vec<RawTicketTypeRequest> =
            ticket_type_requests.into_iter().map(Into::into).collect();

        let validated = validate_account_id(&raw_account_id).and_then(|account_id| {
            let requests = normalize(&raw_requests)?;
            ensure_within_ticket_limit(&requests)?;
            Ok((account_id, calculate_totals(&requests)?))
        });

        let (account_id, totals) = match validated {
            Ok(validated) => validated,
            Err(err) => {
                metrics::counter!("ticket_purchases_rejected_total", "reason" => err.reason())
                    .increment(1);
                return Err(err);
            }
        };

        tracing::Span::current().record("account_id", account_id.as_i64());

        self.payment
            .make_payment(account_id, totals.total_price)
            .await;
        self.reservation
            .reserve_seat(account_id, totals.total_seats)
            .await;

        metrics::counter!("ticket_purchases_total").increment(1);
        metrics::histogram!("ticket_purchase_amount").record(totals.total_price as f64);
        metrics::histogram!("ticket_purchase_seats").record(totals.total_seats as f64);

        tracing::info!(
            total_price = totals.total_price,
            total_seats = totals.total_seats,
            "tickets purchased"
        );

        Ok(())
    }
}
