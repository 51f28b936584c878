//! Price rule repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::pricing_rule::{self, ActiveModel, Entity as PricingRuleEntity};
use common::{transaction, AppError, AppResult};
use domain::{CreatePriceRule, PriceRule};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Price rule repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// Insert a rule; duplicates of an existing route are accepted
    async fn create(&self, input: CreatePriceRule) -> AppResult<PriceRule>;

    /// First rule (lowest id) for the exact directed route
    async fn find_by_route(&self, from_zone: &str, to_zone: &str) -> AppResult<Option<PriceRule>>;
}

/// Concrete implementation of PriceRepository
pub struct PriceStore {
    db: DatabaseConnection,
}

impl PriceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PriceRepository for PriceStore {
    async fn create(&self, input: CreatePriceRule) -> AppResult<PriceRule> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let active_model = ActiveModel {
                    id: NotSet,
                    from_zone: Set(input.from_zone),
                    to_zone: Set(input.to_zone),
                    amount: Set(input.amount),
                };

                let model = active_model.insert(txn).await?;
                Ok(PriceRule::from(model))
            })
        })
        .await
    }

    async fn find_by_route(&self, from_zone: &str, to_zone: &str) -> AppResult<Option<PriceRule>> {
        let result = PricingRuleEntity::find()
            .filter(pricing_rule::Column::FromZone.eq(from_zone))
            .filter(pricing_rule::Column::ToZone.eq(to_zone))
            .order_by_asc(pricing_rule::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(PriceRule::from))
    }
}
