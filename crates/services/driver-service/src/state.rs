//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::DriverStore;
use crate::service::{DriverManager, DriverService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub driver_service: Arc<dyn DriverService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(driver_service: Arc<dyn DriverService>) -> Self {
        Self { driver_service }
    }

    /// Wire the SeaORM-backed repository and service.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let repo = Arc::new(DriverStore::new(db));
        Self::new(Arc::new(DriverManager::new(repo)))
    }
}
