//! HTTP API server with observability for ticket purchasing.
//!
//! Exposes the purchase operation over REST, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use ticketing::{InMemorySeatReservationService, InMemoryTicketPaymentService, TicketService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::purchases::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/purchases", post(routes::purchases::create))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by in-memory providers.
pub fn create_default_state() -> Arc<AppState> {
    let payment = InMemoryTicketPaymentService::new();
    let reservation = InMemorySeatReservationService::new();
    let ticket_service = TicketService::new(payment.clone(), reservation.clone());

    Arc::new(AppState {
        ticket_service,
        payment,
        reservation,
    })
}
