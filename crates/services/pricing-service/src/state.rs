//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::PriceStore;
use crate::service::{PricingManager, PricingService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<dyn PricingService>,
}

impl AppState {
    pub fn new(pricing_service: Arc<dyn PricingService>) -> Self {
        Self { pricing_service }
    }

    /// Wire the SeaORM-backed repository and service.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let repo = Arc::new(PriceStore::new(db));
        Self::new(Arc::new(PricingManager::new(repo)))
    }
}
