//! Ticket purchase endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ticketing::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, RawTicketTypeRequest,
    TicketService,
};
use uuid::Uuid;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub ticket_service:
        TicketService<InMemoryTicketPaymentService, InMemorySeatReservationService>,
    pub payment: InMemoryTicketPaymentService,
    pub reservation: InMemorySeatReservationService,
}

// -- Request types --

/// Both fields are taken as sent; the ticketing rules decide what is valid.
#[derive(Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ticket_type_requests: Vec<RawTicketTypeRequest>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawTicketTypeRequest>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawTicketTypeRequest>>::deserialize(deserializer)?.unwrap_or_default())
}

// -- Response types --

#[derive(Serialize)]
pub struct PurchaseAcceptedResponse {
    pub purchase_ref: String,
    pub status: &'static str,
}

// -- Handlers --

/// POST /purchases — validate a purchase, take payment and reserve seats.
#[tracing::instrument(skip_all, fields(purchase_ref = tracing::field::Empty))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PurchaseAcceptedResponse>), ApiError> {
    let Json(req) = payload?;
    let purchase_ref = Uuid::new_v4();
    tracing::Span::current().record("purchase_ref", tracing::field::display(purchase_ref));

    state
        .ticket_service
        .purchase_tickets(req.account_id, req.ticket_type_requests)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(PurchaseAcceptedResponse {
            purchase_ref: purchase_ref.to_string(),
            status: "accepted",
        }),
    ))
}
