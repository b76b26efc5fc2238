//! External provider traits and in-memory implementations.

pub mod payment;
pub mod seating;

pub use payment::{InMemoryTicketPaymentService, PaymentRecord, TicketPaymentService};
pub use seating::{InMemorySeatReservationService, ReservationRecord, SeatReservationService};
