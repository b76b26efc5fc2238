//! Purchase error types.

use thiserror::Error;

use crate::validator::MAX_TICKETS_PER_PURCHASE;

/// Reasons a single raw ticket request cannot become a [`TicketTypeRequest`].
///
/// [`TicketTypeRequest`]: crate::TicketTypeRequest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketRequestError {
    /// The `type` field is missing or not one of the known ticket types.
    #[error("type must be ADULT, CHILD, or INFANT")]
    InvalidType,

    /// The `noOfTickets` field is missing or not an integer.
    #[error("noOfTickets must be an integer")]
    NonIntegerQuantity,
}

/// The single error a purchase can fail with.
///
/// Callers distinguish failures by the message; the variants exist so
/// that the message text is fixed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// The account id is not a positive integer.
    #[error("Account Id is not valid")]
    InvalidAccountId,

    /// One of the ticket requests is malformed.
    #[error(transparent)]
    TicketRequest(#[from] TicketRequestError),

    /// More tickets were requested than a single purchase allows.
    #[error("Maximum {} tickets per purchase", MAX_TICKETS_PER_PURCHASE)]
    TooManyTickets,
}

impl InvalidPurchase {
    /// Short label for the failing rule, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccountId => "account_id",
            InvalidPurchase::TicketRequest(TicketRequestError::InvalidType) => "ticket_type",
            InvalidPurchase::TicketRequest(TicketRequestError::NonIntegerQuantity) => {
                "ticket_quantity"
            }
            InvalidPurchase::TooManyTickets => "ticket_limit",
        }
    }
}
