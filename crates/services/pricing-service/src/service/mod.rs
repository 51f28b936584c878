//! Service layer - pricing table use cases.

mod pricing_service;

pub use pricing_service::{PricingManager, PricingService};
