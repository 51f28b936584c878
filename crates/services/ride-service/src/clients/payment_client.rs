//! Payment ledger client.

use async_trait::async_trait;

use common::{AppError, AppResult, DownstreamConfig};
use domain::{AuthorizePayment, PaymentReceipt, PAYMENT_SERVICE_NAME};

use super::read_json;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentServiceClient: Send + Sync {
    /// Authorize the ride amount
    async fn authorize(&self, request: AuthorizePayment) -> AppResult<PaymentReceipt>;
}

/// reqwest-backed payment client
pub struct PaymentClient {
    http: reqwest::Client,
    config: DownstreamConfig,
}

impl PaymentClient {
    pub fn new(http: reqwest::Client, config: DownstreamConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl PaymentServiceClient for PaymentClient {
    async fn authorize(&self, request: AuthorizePayment) -> AppResult<PaymentReceipt> {
        let response = self
            .http
            .post(self.config.url("/payments/authorize"))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::downstream(PAYMENT_SERVICE_NAME, e))?;

        read_json(PAYMENT_SERVICE_NAME, response).await
    }
}
