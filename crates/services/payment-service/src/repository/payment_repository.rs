//! Payment repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::entities::payment::{ActiveModel, Entity as PaymentEntity};
use common::{transaction, AppError, AppResult};
use domain::{AuthorizePayment, Payment, PaymentStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Payment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Record a new AUTHORIZED payment
    async fn authorize(&self, input: AuthorizePayment) -> AppResult<Payment>;

    /// Find payment by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payment>>;

    /// Move an AUTHORIZED payment to CAPTURED
    async fn capture(&self, id: i32) -> AppResult<Payment>;
}

/// Concrete implementation of PaymentRepository
pub struct PaymentStore {
    db: DatabaseConnection,
}

impl PaymentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for PaymentStore {
    async fn authorize(&self, input: AuthorizePayment) -> AppResult<Payment> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let now = chrono::Utc::now();
                let active_model = ActiveModel {
                    id: NotSet,
                    ride_id: Set(input.ride_id),
                    amount: Set(input.amount),
                    currency: Set(input.currency),
                    status: Set(PaymentStatus::Authorized.as_str().to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let model = active_model.insert(txn).await?;
                Ok(Payment::try_from(model)?)
            })
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payment>> {
        let result = PaymentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(Payment::try_from)
            .transpose()
            .map_err(AppError::from)
    }

    async fn capture(&self, id: i32) -> AppResult<Payment> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let model = PaymentEntity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Payment"))?;

                let mut payment = Payment::try_from(model.clone())?;
                payment.capture()?;

                let mut active: ActiveModel = model.into();
                active.status = Set(payment.status.as_str().to_string());
                active.updated_at = Set(payment.updated_at);

                let model = active.update(txn).await?;
                Ok(Payment::try_from(model)?)
            })
        })
        .await
    }
}
