//! Driver registry client.

use async_trait::async_trait;

use common::{AppError, AppResult, DownstreamConfig};
use domain::{Driver, DRIVER_SERVICE_NAME};

use super::read_json;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DriverServiceClient: Send + Sync {
    /// First available driver in the zone, if any
    async fn find_available(&self, zone: &str) -> AppResult<Option<Driver>>;
}

/// reqwest-backed driver registry client
pub struct DriverClient {
    http: reqwest::Client,
    config: DownstreamConfig,
}

impl DriverClient {
    pub fn new(http: reqwest::Client, config: DownstreamConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl DriverServiceClient for DriverClient {
    async fn find_available(&self, zone: &str) -> AppResult<Option<Driver>> {
        let response = self
            .http
            .get(self.config.url("/drivers"))
            .query(&[("available", "true"), ("zone", zone)])
            .send()
            .await
            .map_err(|e| AppError::downstream(DRIVER_SERVICE_NAME, e))?;

        let drivers: Vec<Driver> = read_json(DRIVER_SERVICE_NAME, response).await?;
        Ok(drivers.into_iter().next())
    }
}
