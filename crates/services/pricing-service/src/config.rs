//! Pricing service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::PRICING_SERVICE_PORT;

const ENV_PREFIX: &str = "PRICING_SERVICE";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/pricing.db?mode=rwc";

/// Pricing service configuration.
#[derive(Debug, Clone)]
pub struct PricingServiceConfig {
    pub database: DatabaseConfig,
    pub service: ServiceConfig,
}

impl PricingServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX, DEFAULT_DATABASE_URL),
            service: ServiceConfig::from_env(ENV_PREFIX, PRICING_SERVICE_PORT),
        }
    }
}
