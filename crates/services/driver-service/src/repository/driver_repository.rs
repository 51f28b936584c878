//! Driver repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::driver::{self, ActiveModel, Entity as DriverEntity};
use common::{transaction, AppError, AppResult};
use domain::{CreateDriver, Driver, DriverFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Driver repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Insert a new driver
    async fn create(&self, input: CreateDriver) -> AppResult<Driver>;

    /// List drivers matching every present predicate, ordered by id
    async fn list(&self, filter: DriverFilter) -> AppResult<Vec<Driver>>;

    /// Find driver by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Driver>>;

    /// Overwrite the availability flag (last write wins)
    async fn set_availability(&self, id: i32, available: bool) -> AppResult<Driver>;
}

/// Concrete implementation of DriverRepository
pub struct DriverStore {
    db: DatabaseConnection,
}

impl DriverStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DriverRepository for DriverStore {
    async fn create(&self, input: CreateDriver) -> AppResult<Driver> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let active_model = ActiveModel {
                    id: NotSet,
                    name: Set(input.name),
                    zone: Set(input.zone),
                    available: Set(input.available),
                };

                let model = active_model.insert(txn).await?;
                Ok(Driver::from(model))
            })
        })
        .await
    }

    async fn list(&self, filter: DriverFilter) -> AppResult<Vec<Driver>> {
        let mut query = DriverEntity::find();

        if let Some(available) = filter.available {
            query = query.filter(driver::Column::Available.eq(available));
        }
        if let Some(zone) = filter.zone {
            query = query.filter(driver::Column::Zone.eq(zone));
        }

        let models = query
            .order_by_asc(driver::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Driver>> {
        let result = DriverEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Driver::from))
    }

    async fn set_availability(&self, id: i32, available: bool) -> AppResult<Driver> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let driver = DriverEntity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Driver"))?;

                let mut active: ActiveModel = driver.into();
                active.available = Set(available);

                let model = active.update(txn).await?;
                Ok(Driver::from(model))
            })
        })
        .await
    }
}
