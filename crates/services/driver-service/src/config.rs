//! Driver service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::DRIVER_SERVICE_PORT;

const ENV_PREFIX: &str = "DRIVER_SERVICE";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/drivers.db?mode=rwc";

/// Driver service configuration.
#[derive(Debug, Clone)]
pub struct DriverServiceConfig {
    /// Driver store connection
    pub database: DatabaseConfig,
    /// Bind address
    pub service: ServiceConfig,
}

impl DriverServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX, DEFAULT_DATABASE_URL),
            service: ServiceConfig::from_env(ENV_PREFIX, DRIVER_SERVICE_PORT),
        }
    }
}
