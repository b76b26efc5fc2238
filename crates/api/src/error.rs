//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ticketing::InvalidPurchase;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as a purchase.
    BadRequest(String),
    /// The purchase broke one of the ticketing rules.
    Purchase(InvalidPurchase),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Purchase(err) => {
                tracing::warn!(reason = err.reason(), error = %err, "purchase rejected");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<InvalidPurchase> for ApiError {
    fn from(err: InvalidPurchase) -> Self {
        ApiError::Purchase(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
