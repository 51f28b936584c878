//! Ride repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::entities::ride::{ActiveModel, Entity as RideEntity};
use common::{transaction, AppError, AppResult};
use domain::{NewRide, PaymentStatus, Ride, RideStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Ride repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Persist a ride in PENDING status
    async fn create_pending(&self, input: NewRide) -> AppResult<Ride>;

    /// Attach the authorized payment and mark the ride CONFIRMED
    async fn confirm(
        &self,
        id: i32,
        payment_id: i32,
        payment_status: PaymentStatus,
    ) -> AppResult<Ride>;

    /// Find ride by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Ride>>;
}

/// Concrete implementation of RideRepository
pub struct RideStore {
    db: DatabaseConnection,
}

impl RideStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RideRepository for RideStore {
    async fn create_pending(&self, input: NewRide) -> AppResult<Ride> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let now = chrono::Utc::now();
                let active_model = ActiveModel {
                    id: NotSet,
                    passenger_name: Set(input.passenger_name),
                    from_zone: Set(input.from_zone),
                    to_zone: Set(input.to_zone),
                    driver_id: Set(input.driver_id),
                    driver_name: Set(input.driver_name),
                    amount: Set(input.amount),
                    currency: Set(input.currency),
                    payment_id: Set(None),
                    payment_status: Set(None),
                    status: Set(RideStatus::Pending.as_str().to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let model = active_model.insert(txn).await?;
                Ok(Ride::try_from(model)?)
            })
        })
        .await
    }

    async fn confirm(
        &self,
        id: i32,
        payment_id: i32,
        payment_status: PaymentStatus,
    ) -> AppResult<Ride> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let model = RideEntity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Ride"))?;

                let mut active: ActiveModel = model.into();
                active.payment_id = Set(Some(payment_id));
                active.payment_status = Set(Some(payment_status.as_str().to_string()));
                active.status = Set(RideStatus::Confirmed.as_str().to_string());
                active.updated_at = Set(chrono::Utc::now());

                let model = active.update(txn).await?;
                Ok(Ride::try_from(model)?)
            })
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Ride>> {
        let result = RideEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Ride::try_from).transpose().map_err(AppError::from)
    }
}
