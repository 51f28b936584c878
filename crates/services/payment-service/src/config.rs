//! Payment service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::PAYMENT_SERVICE_PORT;

const ENV_PREFIX: &str = "PAYMENT_SERVICE";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/payment.db?mode=rwc";

/// Payment service configuration.
#[derive(Debug, Clone)]
pub struct PaymentServiceConfig {
    pub database: DatabaseConfig,
    pub service: ServiceConfig,
}

impl PaymentServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX, DEFAULT_DATABASE_URL),
            service: ServiceConfig::from_env(ENV_PREFIX, PAYMENT_SERVICE_PORT),
        }
    }
}
