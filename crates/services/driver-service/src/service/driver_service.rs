//! Driver service - Handles driver registry business logic.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppResult, OptionExt};
use domain::{CreateDriver, Driver, DriverFilter};

use crate::repository::DriverRepository;

/// Driver service trait for dependency injection.
#[async_trait]
pub trait DriverService: Send + Sync {
    /// Register a new driver
    async fn register_driver(&self, input: CreateDriver) -> AppResult<Driver>;

    /// List drivers, optionally filtered by availability and zone
    async fn list_drivers(&self, filter: DriverFilter) -> AppResult<Vec<Driver>>;

    /// Get driver by ID
    async fn get_driver(&self, id: i32) -> AppResult<Driver>;

    /// Set the availability flag
    async fn set_availability(&self, id: i32, available: bool) -> AppResult<Driver>;
}

/// Concrete implementation of DriverService using repository.
pub struct DriverManager {
    repo: Arc<dyn DriverRepository>,
}

impl DriverManager {
    /// Create new driver service instance with repository
    pub fn new(repo: Arc<dyn DriverRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DriverService for DriverManager {
    async fn register_driver(&self, input: CreateDriver) -> AppResult<Driver> {
        info!(name = %input.name, zone = %input.zone, "Registering driver");
        let driver = self.repo.create(input).await?;
        info!(driver_id = driver.id, "Driver registered");
        Ok(driver)
    }

    async fn list_drivers(&self, filter: DriverFilter) -> AppResult<Vec<Driver>> {
        debug!(available = ?filter.available, zone = ?filter.zone, "Listing drivers");
        let drivers = self.repo.list(filter).await?;
        debug!(count = drivers.len(), "Drivers listed");
        Ok(drivers)
    }

    async fn get_driver(&self, id: i32) -> AppResult<Driver> {
        let driver = self.repo.find_by_id(id).await?;
        if driver.is_none() {
            warn!(driver_id = id, "Driver not found");
        }
        driver.ok_or_not_found("Driver")
    }

    async fn set_availability(&self, id: i32, available: bool) -> AppResult<Driver> {
        info!(driver_id = id, available, "Updating driver availability");
        self.repo.set_availability(id, available).await
    }
}
