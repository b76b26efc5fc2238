//! Ticket types and the two shapes a ticket request takes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TicketRequestError;

/// The kind of ticket being bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// All ticket types, in price order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Returns the wire name of this ticket type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(TicketRequestError::InvalidType),
        }
    }
}

/// One validated line of a purchase: a ticket type and how many of it.
///
/// The quantity is signed and not range-checked here; the only limit on
/// it is the per-purchase ceiling applied to the sum of all lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: i64,
}

impl TicketTypeRequest {
    /// Creates a request for `no_of_tickets` tickets of `ticket_type`.
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Returns the ticket type.
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    pub fn no_of_tickets(&self) -> i64 {
        self.no_of_tickets
    }

    /// Builds a request from its raw form, checking `type` before `noOfTickets`.
    pub(crate) fn from_raw(raw: &RawTicketTypeRequest) -> Result<Self, TicketRequestError> {
        let ticket_type = raw
            .ticket_type
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(TicketRequestError::InvalidType)?
            .parse::<TicketType>()?;

        // `as_i64` is `None` for floats and strings, so "2" and 2.5 both fail
        let no_of_tickets = raw
            .no_of_tickets
            .as_ref()
            .and_then(Value::as_i64)
            .ok_or(TicketRequestError::NonIntegerQuantity)?;

        Ok(Self::new(ticket_type, no_of_tickets))
    }
}

/// A ticket request as it arrives from outside, before any checking.
///
/// Mirrors the `{ "type": ..., "noOfTickets": ... }` wire shape, but holds
/// whatever JSON the caller sent for each field. Deserializes from any
/// JSON value: a field that is absent, or an entry that is not an object
/// at all, leaves the corresponding field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RawTicketTypeRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    ticket_type: Option<Value>,

    #[serde(rename = "noOfTickets", skip_serializing_if = "Option::is_none")]
    no_of_tickets: Option<Value>,
}

impl RawTicketTypeRequest {
    /// Creates a raw request with both fields present.
    pub fn new(ticket_type: impl Into<Value>, no_of_tickets: impl Into<Value>) -> Self {
        Self {
            ticket_type: Some(ticket_type.into()),
            no_of_tickets: Some(no_of_tickets.into()),
        }
    }

    /// Returns the raw `type` field, if present.
    pub fn ticket_type(&self) -> Option<&Value> {
        self.ticket_type.as_ref()
    }

    /// Returns the raw `noOfTickets` field, if present.
    pub fn no_of_tickets(&self) -> Option<&Value> {
        self.no_of_tickets.as_ref()
    }
}

impl From<Value> for RawTicketTypeRequest {
    fn from(value: Value) -> Self {
        Self {
            ticket_type: value.get("type").cloned(),
            no_of_tickets: value.get("noOfTickets").cloned(),
        }
    }
}

impl From<TicketTypeRequest> for RawTicketTypeRequest {
    fn from(request: TicketTypeRequest) -> Self {
        Self::new(request.ticket_type.as_str(), request.no_of_tickets)
    }
}
