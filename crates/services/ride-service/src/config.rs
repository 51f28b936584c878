//! Ride service configuration.

use std::env;

use common::{env_parse, DatabaseConfig, DownstreamConfig, ServiceConfig};
use domain::{
    DRIVER_SERVICE_PORT, PAYMENT_SERVICE_PORT, PRICING_SERVICE_PORT, RIDE_SERVICE_PORT,
};

const ENV_PREFIX: &str = "RIDE_SERVICE";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/rides.db?mode=rwc";

/// Ride service configuration.
#[derive(Debug, Clone)]
pub struct RideServiceConfig {
    pub database: DatabaseConfig,
    pub service: ServiceConfig,
    pub drivers: DownstreamConfig,
    pub pricing: DownstreamConfig,
    pub payment: DownstreamConfig,
    /// Timeout applied to every downstream call; `None` waits indefinitely
    pub downstream_timeout_ms: Option<u64>,
}

impl RideServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX, DEFAULT_DATABASE_URL),
            service: ServiceConfig::from_env(ENV_PREFIX, RIDE_SERVICE_PORT),
            drivers: downstream("DRIVER_SERVICE_URL", DRIVER_SERVICE_PORT),
            pricing: downstream("PRICING_SERVICE_URL", PRICING_SERVICE_PORT),
            payment: downstream("PAYMENT_SERVICE_URL", PAYMENT_SERVICE_PORT),
            downstream_timeout_ms: env_parse("RIDE_SERVICE_DOWNSTREAM_TIMEOUT_MS"),
        }
    }
}

fn downstream(key: &str, default_port: u16) -> DownstreamConfig {
    DownstreamConfig::new(
        env::var(key).unwrap_or_else(|_| format!("http://localhost:{}", default_port)),
    )
}
