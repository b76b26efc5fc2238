//! Integration tests for the API server.

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup_with_state() -> (axum::Router, Arc<api::routes::purchases::AppState>) {
    let state = api::create_default_state();
    let app = api::create_app(state.clone(), get_metrics_handle());
    (app, state)
}

fn post_purchase(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/purchases")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup_with_state();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_valid_purchase_is_accepted() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": [
                { "type": "ADULT", "noOfTickets": 2 },
                { "type": "CHILD", "noOfTickets": 2 },
                { "type": "INFANT", "noOfTickets": 1 }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let json = json_body(response).await;
    assert_eq!(json["status"], "accepted");
    assert!(uuid::Uuid::parse_str(json["purchase_ref"].as_str().unwrap()).is_ok());

    assert_eq!(state.payment.total_charged(), 60);
    assert_eq!(state.reservation.total_seats_reserved(), 4);
}

#[tokio::test]
async fn test_invalid_account_id_is_rejected() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 0,
            "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": 1 }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Account Id is not valid");
    assert_eq!(state.payment.payment_count(), 0);
    assert_eq!(state.reservation.reservation_count(), 0);
}

#[tokio::test]
async fn test_missing_account_id_is_rejected() {
    let (app, _) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": 1 }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Account Id is not valid");
}

#[tokio::test]
async fn test_unknown_ticket_type_is_rejected() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": [
                { "type": "ADULT", "noOfTickets": 2 },
                { "type": "CHILDREN", "noOfTickets": 2 }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "type must be ADULT, CHILD, or INFANT"
    );
    assert_eq!(state.payment.payment_count(), 0);
}

#[tokio::test]
async fn test_string_quantity_is_rejected() {
    let (app, _) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": "2" }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "noOfTickets must be an integer"
    );
}

#[tokio::test]
async fn test_over_limit_purchase_is_rejected() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": [
                { "type": "ADULT", "noOfTickets": 10 },
                { "type": "CHILD", "noOfTickets": 10 },
                { "type": "INFANT", "noOfTickets": 1 }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Maximum 20 tickets per purchase"
    );
    assert_eq!(state.reservation.reservation_count(), 0);
}

#[tokio::test]
async fn test_purchases_accumulate_across_requests() {
    let (app, state) = setup_with_state();

    for account_id in [1, 2] {
        let response = app
            .clone()
            .oneshot(post_purchase(serde_json::json!({
                "account_id": account_id,
                "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": 1 }]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    let payments = state.payment.payments();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].account_id.as_i64(), 1);
    assert_eq!(payments[1].account_id.as_i64(), 2);
    assert_eq!(state.reservation.total_seats_reserved(), 2);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _) = setup_with_state();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_purchase_metrics_are_exported() {
    let (app, _) = setup_with_state();

    let rejected = app
        .clone()
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 0,
            "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": 1 }]
        })))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let accepted = app
        .clone()
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": [{ "type": "ADULT", "noOfTickets": 1 }]
        })))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::ACCEPTED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let rendered = String::from_utf8(body.to_vec()).unwrap();

    // Other tests share the recorder, so only presence is checked
    assert!(rendered.contains("ticket_purchases_rejected_total{reason=\"account_id\"}"));
    assert!(rendered.contains("ticket_purchases_total"));
    assert!(rendered.contains("ticket_purchase_amount"));
    assert!(rendered.contains("ticket_purchase_seats"));
}

#[tokio::test]
async fn test_null_ticket_list_is_an_empty_purchase() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 4,
            "ticket_type_requests": null
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(state.payment.payments()[0].amount, 0);
    assert_eq!(state.reservation.reservations()[0].seats, 0);
}

#[tokio::test]
async fn test_non_array_ticket_list_is_a_bad_request() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(post_purchase(serde_json::json!({
            "account_id": 1,
            "ticket_type_requests": "ADULT"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].as_str().is_some());
    assert_eq!(state.payment.payment_count(), 0);
}

#[tokio::test]
async fn test_unparseable_body_is_a_bad_request() {
    let (app, _) = setup_with_state();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/purchases")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].as_str().is_some());
}
