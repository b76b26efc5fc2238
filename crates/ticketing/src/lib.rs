//! Ticket purchasing for a venue.
//!
//! A purchase is an account id plus a list of loosely-typed ticket
//! requests. [`TicketService::purchase_tickets`] runs it through three
//! stages, each of which either hands validated data to the next or
//! rejects the whole purchase:
//! 1. Check the account id and normalize every raw request into a
//!    [`TicketTypeRequest`]
//! 2. Enforce the per-purchase ticket ceiling
//! 3. Price the tickets and count the seats they occupy
//!
//! Only then are the payment and seat reservation providers called,
//! payment first.

pub mod error;
mod normalizer;
mod pricing;
pub mod service;
pub mod services;
pub mod ticket;
mod validator;

pub use error::{InvalidPurchase, TicketRequestError};
pub use service::TicketService;
pub use services::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, PaymentRecord,
    ReservationRecord, SeatReservationService, TicketPaymentService,
};
pub use ticket::{RawTicketTypeRequest, TicketType, TicketTypeRequest};
pub use validator::MAX_TICKETS_PER_PURCHASE;
