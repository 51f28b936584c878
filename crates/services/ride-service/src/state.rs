//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use common::AppResult;

use crate::clients::{http_client, DriverClient, PaymentClient, PricingClient};
use crate::config::RideServiceConfig;
use crate::repository::RideStore;
use crate::service::{RideOrchestrator, RideService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub ride_service: Arc<dyn RideService>,
}

impl AppState {
    pub fn new(ride_service: Arc<dyn RideService>) -> Self {
        Self { ride_service }
    }

    /// Wire the ride store and the three downstream clients over one HTTP client.
    pub fn from_config(db: DatabaseConnection, config: &RideServiceConfig) -> AppResult<Self> {
        let http = http_client(config.downstream_timeout_ms)?;

        let orchestrator = RideOrchestrator::new(
            Arc::new(RideStore::new(db)),
            Arc::new(DriverClient::new(http.clone(), config.drivers.clone())),
            Arc::new(PricingClient::new(http.clone(), config.pricing.clone())),
            Arc::new(PaymentClient::new(http, config.payment.clone())),
        );

        Ok(Self::new(Arc::new(orchestrator)))
    }
}
