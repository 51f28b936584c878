//! Pricing service - flat route pricing table.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{normalize_zone, CreatePriceRule, PriceQuote, PriceRule};

use crate::repository::PriceRepository;

/// Pricing service trait for dependency injection.
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Add a price rule for a directed route
    async fn create_rule(&self, input: CreatePriceRule) -> AppResult<PriceRule>;

    /// Quote the price of a directed route
    async fn get_price(&self, from_zone: &str, to_zone: &str) -> AppResult<PriceQuote>;
}

/// Concrete implementation of PricingService using repository.
pub struct PricingManager {
    repo: Arc<dyn PriceRepository>,
}

impl PricingManager {
    /// Create new pricing service instance with repository
    pub fn new(repo: Arc<dyn PriceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PricingService for PricingManager {
    async fn create_rule(&self, input: CreatePriceRule) -> AppResult<PriceRule> {
        let input = input.normalized();
        info!(
            from = %input.from_zone,
            to = %input.to_zone,
            amount = input.amount,
            "Creating price rule"
        );
        let rule = self.repo.create(input).await?;
        info!(rule_id = rule.id, "Price rule created");
        Ok(rule)
    }

    async fn get_price(&self, from_zone: &str, to_zone: &str) -> AppResult<PriceQuote> {
        let from_zone = normalize_zone(from_zone);
        let to_zone = normalize_zone(to_zone);
        debug!(from = %from_zone, to = %to_zone, "Looking up price");

        match self.repo.find_by_route(&from_zone, &to_zone).await? {
            Some(rule) => Ok(rule.quote()),
            None => {
                warn!(from = %from_zone, to = %to_zone, "No price rule for route");
                Err(AppError::price_not_found(from_zone, to_zone))
            }
        }
    }
}
