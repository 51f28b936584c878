//! Payment service - authorize and capture.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppResult, OptionExt};
use domain::{AuthorizePayment, Payment, PaymentReceipt};

use crate::repository::PaymentRepository;

/// Payment service trait for dependency injection.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Authorize an amount for a ride
    async fn authorize(&self, input: AuthorizePayment) -> AppResult<PaymentReceipt>;

    /// Capture a previously authorized payment
    async fn capture(&self, payment_id: i32) -> AppResult<PaymentReceipt>;

    /// Get payment by ID
    async fn get_payment(&self, id: i32) -> AppResult<Payment>;
}

/// Concrete implementation of PaymentService using repository.
pub struct PaymentManager {
    repo: Arc<dyn PaymentRepository>,
}

impl PaymentManager {
    pub fn new(repo: Arc<dyn PaymentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PaymentService for PaymentManager {
    async fn authorize(&self, input: AuthorizePayment) -> AppResult<PaymentReceipt> {
        info!(
            ride_id = input.ride_id,
            amount = input.amount,
            currency = %input.currency,
            "Authorizing payment"
        );
        let payment = self.repo.authorize(input).await?;
        info!(payment_id = payment.id, "Payment authorized");
        Ok(payment.receipt())
    }

    async fn capture(&self, payment_id: i32) -> AppResult<PaymentReceipt> {
        info!(payment_id, "Capturing payment");
        let payment = self.repo.capture(payment_id).await.map_err(|e| {
            warn!(payment_id, error = %e, "Capture rejected");
            e
        })?;
        Ok(payment.receipt())
    }

    async fn get_payment(&self, id: i32) -> AppResult<Payment> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Payment")
    }
}
