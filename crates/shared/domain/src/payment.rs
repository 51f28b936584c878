//! Payment entity and its two-step status.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_CURRENCY, PAYMENT_STATUS_AUTHORIZED, PAYMENT_STATUS_CAPTURED};
use crate::error::{DomainError, DomainResult};

/// Payment status. AUTHORIZED moves to CAPTURED exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Authorized,
    Captured,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => PAYMENT_STATUS_AUTHORIZED,
            PaymentStatus::Captured => PAYMENT_STATUS_CAPTURED,
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PAYMENT_STATUS_AUTHORIZED => Ok(PaymentStatus::Authorized),
            PAYMENT_STATUS_CAPTURED => Ok(PaymentStatus::Captured),
            other => Err(DomainError::internal(format!(
                "Unknown payment status '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Payment {
    pub id: i32,
    pub ride_id: i32,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Move an authorized payment to CAPTURED.
    ///
    /// Capturing twice is rejected; there is no refund or cancel path.
    pub fn capture(&mut self) -> DomainResult<()> {
        if self.status != PaymentStatus::Authorized {
            return Err(DomainError::invalid_state(format!(
                "Cannot capture payment in status {}",
                self.status
            )));
        }
        self.status = PaymentStatus::Captured;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Short form returned by authorize and capture.
    pub fn receipt(&self) -> PaymentReceipt {
        PaymentReceipt {
            payment_id: self.id,
            status: self.status,
        }
    }
}

/// Authorization request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthorizePayment {
    pub ride_id: i32,
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: f64,
    #[serde(default = "default_currency")]
    #[validate(length(min = 1, message = "Currency cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "CAD"))]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Capture request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CapturePayment {
    pub payment_id: i32,
}

/// Response to authorize and capture calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentReceipt {
    pub payment_id: i32,
    pub status: PaymentStatus,
}
