//! Ride service - orchestrates driver lookup, pricing and payment for a ride.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{normalize_zone, AuthorizePayment, CreateRide, NewRide, RideResponse};

use crate::clients::{DriverServiceClient, PaymentServiceClient, PricingServiceClient};
use crate::repository::RideRepository;

/// Ride service trait for dependency injection.
#[async_trait]
pub trait RideService: Send + Sync {
    /// Book a ride: driver, price, pending record, payment, confirmation
    async fn create_ride(&self, input: CreateRide) -> AppResult<RideResponse>;

    /// Get the stored ride aggregate
    async fn get_ride(&self, id: i32) -> AppResult<RideResponse>;
}

/// Concrete implementation of RideService.
///
/// Downstream calls are sequential and never retried. A payment failure leaves
/// the PENDING ride in place.
pub struct RideOrchestrator {
    rides: Arc<dyn RideRepository>,
    drivers: Arc<dyn DriverServiceClient>,
    pricing: Arc<dyn PricingServiceClient>,
    payments: Arc<dyn PaymentServiceClient>,
}

impl RideOrchestrator {
    pub fn new(
        rides: Arc<dyn RideRepository>,
        drivers: Arc<dyn DriverServiceClient>,
        pricing: Arc<dyn PricingServiceClient>,
        payments: Arc<dyn PaymentServiceClient>,
    ) -> Self {
        Self {
            rides,
            drivers,
            pricing,
            payments,
        }
    }
}

#[async_trait]
impl RideService for RideOrchestrator {
    async fn create_ride(&self, input: CreateRide) -> AppResult<RideResponse> {
        info!(
            passenger = %input.passenger_name,
            from = %input.from_zone,
            to = %input.to_zone,
            "Creating ride"
        );

        let driver = match self.drivers.find_available(&input.from_zone).await? {
            Some(driver) => driver,
            None => {
                warn!(zone = %input.from_zone, "No available driver");
                return Err(AppError::driver_unavailable(input.from_zone));
            }
        };
        debug!(driver_id = driver.id, "Driver selected");

        let quote = self
            .pricing
            .quote(&input.from_zone, &input.to_zone)
            .await?;
        debug!(amount = quote.amount, currency = %quote.currency, "Route priced");

        let pending = self
            .rides
            .create_pending(NewRide {
                passenger_name: input.passenger_name,
                from_zone: normalize_zone(&input.from_zone),
                to_zone: normalize_zone(&input.to_zone),
                driver_id: driver.id,
                driver_name: driver.name,
                amount: quote.amount,
                currency: quote.currency,
            })
            .await?;
        info!(ride_id = pending.id, "Ride recorded as pending");

        let receipt = self
            .payments
            .authorize(AuthorizePayment {
                ride_id: pending.id,
                amount: pending.amount,
                currency: pending.currency.clone(),
            })
            .await
            .map_err(|e| {
                error!(ride_id = pending.id, error = %e, "Payment authorization failed");
                e
            })?;

        let ride = self
            .rides
            .confirm(pending.id, receipt.payment_id, receipt.status)
            .await?;
        info!(ride_id = ride.id, payment_id = receipt.payment_id, "Ride confirmed");

        Ok(RideResponse::from(ride))
    }

    async fn get_ride(&self, id: i32) -> AppResult<RideResponse> {
        let ride = self.rides.find_by_id(id).await?.ok_or_not_found("Ride")?;
        Ok(RideResponse::from(ride))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{
        MockDriverServiceClient, MockPaymentServiceClient, MockPricingServiceClient,
    };
    use crate::repository::MockRideRepository;
    use chrono::Utc;
    use domain::{Driver, PaymentReceipt, PaymentStatus, PriceQuote, Ride, RideStatus};
    use mockall::predicate::eq;

    fn request() -> CreateRide {
        CreateRide {
            passenger_name: "Alice".to_string(),
            from_zone: "A".to_string(),
            to_zone: "B".to_string(),
        }
    }

    fn john() -> Driver {
        Driver {
            id: 1,
            name: "John Doe".to_string(),
            zone: "A".to_string(),
            available: true,
        }
    }

    fn quote() -> PriceQuote {
        PriceQuote {
            from_zone: "A".to_string(),
            to_zone: "B".to_string(),
            amount: 12.5,
            currency: "CAD".to_string(),
        }
    }

    fn stored(input: NewRide, id: i32) -> Ride {
        let now = Utc::now();
        Ride {
            id,
            passenger_name: input.passenger_name,
            from_zone: input.from_zone,
            to_zone: input.to_zone,
            driver_id: input.driver_id,
            driver_name: input.driver_name,
            amount: input.amount,
            currency: input.currency,
            payment_id: None,
            payment_status: None,
            status: RideStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    fn confirmed(id: i32, payment_id: i32) -> Ride {
        let mut ride = stored(
            NewRide {
                passenger_name: "Alice".to_string(),
                from_zone: "A".to_string(),
                to_zone: "B".to_string(),
                driver_id: 1,
                driver_name: "John Doe".to_string(),
                amount: 12.5,
                currency: "CAD".to_string(),
            },
            id,
        );
        ride.payment_id = Some(payment_id);
        ride.payment_status = Some(PaymentStatus::Authorized);
        ride.status = RideStatus::Confirmed;
        ride
    }

    struct Mocks {
        rides: MockRideRepository,
        drivers: MockDriverServiceClient,
        pricing: MockPricingServiceClient,
        payments: MockPaymentServiceClient,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                rides: MockRideRepository::new(),
                drivers: MockDriverServiceClient::new(),
                pricing: MockPricingServiceClient::new(),
                payments: MockPaymentServiceClient::new(),
            }
        }

        fn build(self) -> RideOrchestrator {
            RideOrchestrator::new(
                Arc::new(self.rides),
                Arc::new(self.drivers),
                Arc::new(self.pricing),
                Arc::new(self.payments),
            )
        }
    }

    #[tokio::test]
    async fn test_create_ride_happy_path() {
        let mut mocks = Mocks::new();
        mocks
            .drivers
            .expect_find_available()
            .with(eq("A"))
            .returning(|_| Ok(Some(john())));
        mocks
            .pricing
            .expect_quote()
            .with(eq("A"), eq("B"))
            .returning(|_, _| Ok(quote()));
        mocks
            .rides
            .expect_create_pending()
            .withf(|ride| ride.driver_id == 1 && ride.amount == 12.5 && ride.currency == "CAD")
            .times(1)
            .returning(|input| Ok(stored(input, 10)));
        mocks
            .payments
            .expect_authorize()
            .withf(|request| request.ride_id == 10 && request.amount == 12.5)
            .returning(|_| {
                Ok(PaymentReceipt {
                    payment_id: 7,
                    status: PaymentStatus::Authorized,
                })
            });
        mocks
            .rides
            .expect_confirm()
            .with(eq(10), eq(7), eq(PaymentStatus::Authorized))
            .times(1)
            .returning(|id, payment_id, _| Ok(confirmed(id, payment_id)));

        let response = mocks.build().create_ride(request()).await.unwrap();

        assert_eq!(response.id, 10);
        assert_eq!(response.status, RideStatus::Confirmed);
        assert_eq!(response.driver.name, "John Doe");
        assert_eq!(response.amount, 12.5);
        let payment = response.payment.unwrap();
        assert_eq!(payment.id, 7);
        assert_eq!(payment.status, PaymentStatus::Authorized);
    }

    #[tokio::test]
    async fn test_no_driver_persists_nothing() {
        let mut mocks = Mocks::new();
        mocks.drivers.expect_find_available().returning(|_| Ok(None));
        mocks.pricing.expect_quote().never();
        mocks.rides.expect_create_pending().never();
        mocks.payments.expect_authorize().never();

        let result = mocks.build().create_ride(request()).await;

        assert!(matches!(result, Err(AppError::DriverUnavailable(zone)) if zone == "A"));
    }

    #[tokio::test]
    async fn test_missing_price_persists_nothing() {
        let mut mocks = Mocks::new();
        mocks
            .drivers
            .expect_find_available()
            .returning(|_| Ok(Some(john())));
        mocks
            .pricing
            .expect_quote()
            .returning(|from, to| Err(AppError::price_not_found(from, to)));
        mocks.rides.expect_create_pending().never();
        mocks.payments.expect_authorize().never();

        let result = mocks.build().create_ride(request()).await;

        assert!(matches!(result, Err(AppError::PriceNotFound { .. })));
    }

    #[tokio::test]
    async fn test_payment_failure_leaves_pending_ride() {
        let mut mocks = Mocks::new();
        mocks
            .drivers
            .expect_find_available()
            .returning(|_| Ok(Some(john())));
        mocks.pricing.expect_quote().returning(|_, _| Ok(quote()));
        mocks
            .rides
            .expect_create_pending()
            .times(1)
            .returning(|input| Ok(stored(input, 3)));
        mocks
            .payments
            .expect_authorize()
            .returning(|_| Err(AppError::downstream("payment", "connection refused")));
        mocks.rides.expect_confirm().never();

        let result = mocks.build().create_ride(request()).await;

        assert!(matches!(result, Err(AppError::Downstream { .. })));
    }

    #[tokio::test]
    async fn test_zones_are_stored_uppercase() {
        let mut mocks = Mocks::new();
        mocks
            .drivers
            .expect_find_available()
            .with(eq("a"))
            .returning(|_| Ok(Some(john())));
        mocks.pricing.expect_quote().returning(|_, _| Ok(quote()));
        mocks
            .rides
            .expect_create_pending()
            .withf(|ride| ride.from_zone == "A" && ride.to_zone == "B")
            .returning(|input| Ok(stored(input, 1)));
        mocks.payments.expect_authorize().returning(|_| {
            Ok(PaymentReceipt {
                payment_id: 2,
                status: PaymentStatus::Authorized,
            })
        });
        mocks
            .rides
            .expect_confirm()
            .returning(|id, payment_id, _| Ok(confirmed(id, payment_id)));

        let input = CreateRide {
            passenger_name: "Alice".to_string(),
            from_zone: "a".to_string(),
            to_zone: "b".to_string(),
        };
        let response = mocks.build().create_ride(input).await.unwrap();

        assert_eq!(response.from_zone, "A");
    }

    #[tokio::test]
    async fn test_get_ride_not_found() {
        let mut mocks = Mocks::new();
        mocks.rides.expect_find_by_id().returning(|_| Ok(None));

        let result = mocks.build().get_ride(5).await;

        assert!(matches!(result, Err(AppError::NotFound(entity)) if entity == "Ride"));
    }
}
