//! HTTP tests for ride booking with the downstream services mocked.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{Database, DatabaseConfig, DownstreamConfig};
use ride_service_lib::config::RideServiceConfig;
use ride_service_lib::infra::Migrator;

async fn test_app(drivers: &MockServer, pricing: &MockServer, payment: &MockServer) -> Router {
    test_app_with_timeout(drivers, pricing, payment, None).await
}

async fn test_app_with_timeout(
    drivers: &MockServer,
    pricing: &MockServer,
    payment: &MockServer,
    timeout_ms: Option<u64>,
) -> Router {
    let db = Database::connect::<Migrator>(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");

    let mut config = RideServiceConfig::from_env();
    config.drivers = DownstreamConfig::new(drivers.base_url());
    config.pricing = DownstreamConfig::new(pricing.base_url());
    config.payment = DownstreamConfig::new(payment.base_url());
    config.downstream_timeout_ms = timeout_ms;

    ride_service_lib::app(db.get_connection(), &config).expect("ride app")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn mock_driver(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/drivers").query_param("zone", "A");
            then.status(200).json_body(json!([
                {"id": 1, "name": "John Doe", "zone": "A", "available": true}
            ]));
        })
        .await;
}

async fn mock_price(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/price");
            then.status(200).json_body(json!({
                "from_zone": "A", "to_zone": "B", "amount": 12.5, "currency": "CAD"
            }));
        })
        .await;
}

fn alice() -> Value {
    json!({"passenger": "Alice", "from": "A", "to": "B"})
}

#[tokio::test]
async fn test_health_is_static() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "service": "ride"}));
}

#[tokio::test]
async fn test_book_and_fetch_ride() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    mock_driver(&drivers).await;
    mock_price(&pricing).await;
    payment
        .mock_async(|when, then| {
            when.method(POST).path("/payments/authorize");
            then.status(200)
                .json_body(json!({"payment_id": 5, "status": "AUTHORIZED"}));
        })
        .await;
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, ride) = send(&app, "POST", "/rides", Some(alice())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ride["status"], "CONFIRMED");
    assert_eq!(ride["driver"], json!({"id": 1, "name": "John Doe"}));
    assert_eq!(ride["amount"], 12.5);
    assert_eq!(ride["payment"]["status"], "AUTHORIZED");

    let id = ride["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/rides/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, ride);
}

#[tokio::test]
async fn test_no_driver_returns_404() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    drivers
        .mock_async(|when, then| {
            when.method(GET).path("/drivers");
            then.status(200).json_body(json!([]));
        })
        .await;
    let price = pricing
        .mock_async(|when, then| {
            when.any_request();
            then.status(200);
        })
        .await;
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(&app, "POST", "/rides", Some(alice())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "DRIVER_UNAVAILABLE");
    assert_eq!(price.hits_async().await, 0);

    let (status, _) = send(&app, "GET", "/rides/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_price_returns_404() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    mock_driver(&drivers).await;
    pricing
        .mock_async(|when, then| {
            when.method(GET).path("/price");
            then.status(404);
        })
        .await;
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(&app, "POST", "/rides", Some(alice())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "PRICE_NOT_FOUND");

    let (status, _) = send(&app, "GET", "/rides/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_failure_keeps_pending_ride() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    mock_driver(&drivers).await;
    mock_price(&pricing).await;
    payment
        .mock_async(|when, then| {
            when.method(POST).path("/payments/authorize");
            then.status(500);
        })
        .await;
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(&app, "POST", "/rides", Some(alice())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "DOWNSTREAM_FAILURE");

    let (status, ride) = send(&app, "GET", "/rides/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ride["status"], "PENDING");
    assert!(ride.get("payment").is_none());
}

#[tokio::test]
async fn test_empty_passenger_rejected() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(
        &app,
        "POST",
        "/rides",
        Some(json!({"passenger_name": "", "from_zone": "A", "to_zone": "B"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Passenger name cannot be empty");
}

#[tokio::test]
async fn test_blank_zone_rejected() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    let lookup = drivers
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!([]));
        })
        .await;
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(
        &app,
        "POST",
        "/rides",
        Some(json!({"passenger": "Alice", "from": "  ", "to": "B"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(lookup.hits_async().await, 0);
}

#[tokio::test]
async fn test_slow_pricing_times_out_as_downstream_failure() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    mock_driver(&drivers).await;
    pricing
        .mock_async(|when, then| {
            when.method(GET).path("/price");
            then.status(200)
                .delay(Duration::from_millis(1000))
                .json_body(json!({
                    "from_zone": "A", "to_zone": "B", "amount": 12.5, "currency": "CAD"
                }));
        })
        .await;
    let app = test_app_with_timeout(&drivers, &pricing, &payment, Some(50)).await;

    let (status, body) = send(&app, "POST", "/rides", Some(alice())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "DOWNSTREAM_FAILURE");
}

#[tokio::test]
async fn test_non_numeric_ride_id_returns_json_error() {
    let (drivers, pricing, payment) = (
        MockServer::start_async().await,
        MockServer::start_async().await,
        MockServer::start_async().await,
    );
    let app = test_app(&drivers, &pricing, &payment).await;

    let (status, body) = send(&app, "GET", "/rides/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
