//! Ride entity and the aggregate returned by the orchestrator.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{RIDE_STATUS_CONFIRMED, RIDE_STATUS_PENDING};
use crate::error::DomainError;
use crate::payment::PaymentStatus;
use crate::validation::not_blank;

/// Ride status: PENDING until the payment is authorized, then CONFIRMED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum RideStatus {
    Pending,
    Confirmed,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => RIDE_STATUS_PENDING,
            RideStatus::Confirmed => RIDE_STATUS_CONFIRMED,
        }
    }
}

impl FromStr for RideStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RIDE_STATUS_PENDING => Ok(RideStatus::Pending),
            RIDE_STATUS_CONFIRMED => Ok(RideStatus::Confirmed),
            other => Err(DomainError::internal(format!("Unknown ride status '{}'", other))),
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ride record owned by the ride service.
///
/// Driver and payment data are copied by value from the other services.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: i32,
    pub passenger_name: String,
    pub from_zone: String,
    pub to_zone: String,
    pub driver_id: i32,
    pub driver_name: String,
    pub amount: f64,
    pub currency: String,
    pub payment_id: Option<i32>,
    pub payment_status: Option<PaymentStatus>,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to persist a ride before payment authorization
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub passenger_name: String,
    pub from_zone: String,
    pub to_zone: String,
    pub driver_id: i32,
    pub driver_name: String,
    pub amount: f64,
    pub currency: String,
}

/// Ride request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateRide {
    #[serde(alias = "passenger")]
    #[validate(custom(function = "not_blank", message = "Passenger name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub passenger_name: String,
    #[serde(alias = "from")]
    #[validate(custom(function = "not_blank", message = "Origin zone cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "A"))]
    pub from_zone: String,
    #[serde(alias = "to")]
    #[validate(custom(function = "not_blank", message = "Destination zone cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "B"))]
    pub to_zone: String,
}

/// Driver fields echoed in a ride response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DriverSummary {
    pub id: i32,
    pub name: String,
}

/// Payment fields echoed in a ride response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentSummary {
    pub id: i32,
    pub status: PaymentStatus,
    pub amount: f64,
    pub currency: String,
}

/// Ride aggregate (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RideResponse {
    pub id: i32,
    pub passenger_name: String,
    pub from_zone: String,
    pub to_zone: String,
    pub driver_id: i32,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<i32>,
    pub status: RideStatus,
    pub driver: DriverSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentSummary>,
    pub created_at: DateTime<Utc>,
}

impl From<Ride> for RideResponse {
    fn from(ride: Ride) -> Self {
        let payment = match (ride.payment_id, ride.payment_status) {
            (Some(id), Some(status)) => Some(PaymentSummary {
                id,
                status,
                amount: ride.amount,
                currency: ride.currency.clone(),
            }),
            _ => None,
        };

        Self {
            id: ride.id,
            passenger_name: ride.passenger_name,
            from_zone: ride.from_zone,
            to_zone: ride.to_zone,
            driver_id: ride.driver_id,
            amount: ride.amount,
            payment_id: ride.payment_id,
            status: ride.status,
            driver: DriverSummary {
                id: ride.driver_id,
                name: ride.driver_name,
            },
            payment,
            created_at: ride.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(payment: Option<(i32, PaymentStatus)>) -> Ride {
        let now = Utc::now();
        Ride {
            id: 1,
            passenger_name: "Alice".to_string(),
            from_zone: "A".to_string(),
            to_zone: "B".to_string(),
            driver_id: 4,
            driver_name: "John Doe".to_string(),
            amount: 12.5,
            currency: "CAD".to_string(),
            payment_id: payment.map(|(id, _)| id),
            payment_status: payment.map(|(_, s)| s),
            status: if payment.is_some() {
                RideStatus::Confirmed
            } else {
                RideStatus::Pending
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn confirmed_ride_response_includes_payment() {
        let response = RideResponse::from(ride(Some((9, PaymentStatus::Authorized))));
        assert_eq!(response.driver.name, "John Doe");
        let payment = response.payment.unwrap();
        assert_eq!(payment.id, 9);
        assert_eq!(payment.status, PaymentStatus::Authorized);
        assert_eq!(payment.amount, 12.5);
    }

    #[test]
    fn pending_ride_response_has_no_payment() {
        let response = RideResponse::from(ride(None));
        assert_eq!(response.status, RideStatus::Pending);
        assert!(response.payment.is_none());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("payment").is_none());
        assert_eq!(json["status"], "PENDING");
    }

    #[test]
    fn create_ride_accepts_short_field_names() {
        let payload: CreateRide =
            serde_json::from_str(r#"{"passenger":"Alice","from":"A","to":"B"}"#).unwrap();
        assert_eq!(payload.passenger_name, "Alice");
        assert_eq!(payload.from_zone, "A");
        assert_eq!(payload.to_zone, "B");
    }
}
