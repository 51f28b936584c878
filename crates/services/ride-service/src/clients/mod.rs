//! HTTP clients for the services a ride depends on.
//!
//! Each client sits behind a trait so the orchestrator can be tested with mocks.

mod driver_client;
mod payment_client;
mod pricing_client;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use common::{AppError, AppResult};

pub use driver_client::{DriverClient, DriverServiceClient};
pub use payment_client::{PaymentClient, PaymentServiceClient};
pub use pricing_client::{PricingClient, PricingServiceClient};

#[cfg(any(test, feature = "test-utils"))]
pub use driver_client::MockDriverServiceClient;
#[cfg(any(test, feature = "test-utils"))]
pub use payment_client::MockPaymentServiceClient;
#[cfg(any(test, feature = "test-utils"))]
pub use pricing_client::MockPricingServiceClient;

/// Build the shared HTTP client. No timeout unless one is configured.
pub fn http_client(timeout_ms: Option<u64>) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(ms) = timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    builder
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))
}

/// Decode a 2xx JSON body; anything else is a downstream failure.
async fn read_json<T: DeserializeOwned>(service: &str, response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    debug!(service, %status, "Downstream response");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::downstream(
            service,
            format!("unexpected status {}: {}", status, body),
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::downstream(service, e))
}
