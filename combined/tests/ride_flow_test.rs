//! End-to-end booking across all four services on ephemeral local ports.

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use common::{Database, DatabaseConfig, DownstreamConfig};
use ride_service_lib::config::RideServiceConfig;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

struct Stack {
    drivers: String,
    pricing: String,
    rides: String,
    http: reqwest::Client,
}

async fn start_stack() -> Stack {
    let memory = DatabaseConfig::in_memory();

    let db = Database::connect::<driver_service_lib::infra::Migrator>(&memory)
        .await
        .unwrap();
    let drivers = serve(driver_service_lib::app(db.get_connection())).await;

    let db = Database::connect::<pricing_service_lib::infra::Migrator>(&memory)
        .await
        .unwrap();
    let pricing = serve(pricing_service_lib::app(db.get_connection())).await;

    let db = Database::connect::<payment_service_lib::infra::Migrator>(&memory)
        .await
        .unwrap();
    let payment = serve(payment_service_lib::app(db.get_connection())).await;

    let mut config = RideServiceConfig::from_env();
    config.drivers = DownstreamConfig::new(drivers.clone());
    config.pricing = DownstreamConfig::new(pricing.clone());
    config.payment = DownstreamConfig::new(payment.clone());
    let db = Database::connect::<ride_service_lib::infra::Migrator>(&memory)
        .await
        .unwrap();
    let rides = serve(ride_service_lib::app(db.get_connection(), &config).unwrap()).await;

    Stack {
        drivers,
        pricing,
        rides,
        http: reqwest::Client::new(),
    }
}

impl Stack {
    async fn post(&self, url: String, body: Value) -> (u16, Value) {
        let response = self.http.post(url).json(&body).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    async fn get(&self, url: String) -> (u16, Value) {
        let response = self.http.get(url).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }
}

#[tokio::test]
async fn test_alice_books_a_ride_with_john() {
    let stack = start_stack().await;

    let (status, driver) = stack
        .post(
            format!("{}/drivers", stack.drivers),
            json!({"name": "John Doe", "zone": "A", "available": true}),
        )
        .await;
    assert_eq!(status, 201);

    let (status, _) = stack
        .post(
            format!("{}/prices", stack.pricing),
            json!({"from": "A", "to": "B", "amount": 12.5}),
        )
        .await;
    assert_eq!(status, 201);

    let (status, ride) = stack
        .post(
            format!("{}/rides", stack.rides),
            json!({"passenger": "Alice", "from": "A", "to": "B"}),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(ride["passenger_name"], "Alice");
    assert_eq!(ride["driver"]["id"], driver["id"]);
    assert_eq!(ride["driver"]["name"], "John Doe");
    assert_eq!(ride["amount"], 12.5);
    assert_eq!(ride["status"], "CONFIRMED");
    assert_eq!(ride["payment"]["status"], "AUTHORIZED");

    let (status, fetched) = stack
        .get(format!("{}/rides/{}", stack.rides, ride["id"]))
        .await;
    assert_eq!(status, 200);
    assert_eq!(fetched, ride);

    // Booking does not change driver availability
    let (_, available) = stack
        .get(format!("{}/drivers?available=true&zone=A", stack.drivers))
        .await;
    assert_eq!(available.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_booking_without_driver_fails() {
    let stack = start_stack().await;

    let (status, body) = stack
        .post(
            format!("{}/rides", stack.rides),
            json!({"passenger": "Alice", "from": "A", "to": "B"}),
        )
        .await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "DRIVER_UNAVAILABLE");
}

#[tokio::test]
async fn test_reverse_route_has_no_price() {
    let stack = start_stack().await;
    stack
        .post(
            format!("{}/drivers", stack.drivers),
            json!({"name": "John Doe", "zone": "B"}),
        )
        .await;
    stack
        .post(
            format!("{}/prices", stack.pricing),
            json!({"from": "A", "to": "B", "amount": 12.5}),
        )
        .await;

    let (status, body) = stack
        .post(
            format!("{}/rides", stack.rides),
            json!({"passenger": "Bob", "from": "B", "to": "A"}),
        )
        .await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "PRICE_NOT_FOUND");
}
