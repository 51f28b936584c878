//! Pricing table client.

use async_trait::async_trait;
use reqwest::StatusCode;

use common::{AppError, AppResult, DownstreamConfig};
use domain::{PriceQuote, PRICING_SERVICE_NAME};

use super::read_json;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PricingServiceClient: Send + Sync {
    /// Price of the directed route; a missing rule is `PriceNotFound`
    async fn quote(&self, from_zone: &str, to_zone: &str) -> AppResult<PriceQuote>;
}

/// reqwest-backed pricing client
pub struct PricingClient {
    http: reqwest::Client,
    config: DownstreamConfig,
}

impl PricingClient {
    pub fn new(http: reqwest::Client, config: DownstreamConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl PricingServiceClient for PricingClient {
    async fn quote(&self, from_zone: &str, to_zone: &str) -> AppResult<PriceQuote> {
        let response = self
            .http
            .get(self.config.url("/price"))
            .query(&[("from", from_zone), ("to", to_zone)])
            .send()
            .await
            .map_err(|e| AppError::downstream(PRICING_SERVICE_NAME, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::price_not_found(from_zone, to_zone));
        }

        read_json(PRICING_SERVICE_NAME, response).await
    }
}
