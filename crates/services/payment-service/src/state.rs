//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::PaymentStore;
use crate::service::{PaymentManager, PaymentService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub payment_service: Arc<dyn PaymentService>,
}

impl AppState {
    pub fn new(payment_service: Arc<dyn PaymentService>) -> Self {
        Self { payment_service }
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        let repo = Arc::new(PaymentStore::new(db));
        Self::new(Arc::new(PaymentManager::new(repo)))
    }
}
