//! Price rules and quotes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{normalize_zone, DEFAULT_CURRENCY};
use crate::validation::not_blank;

/// Flat-rate price for one directed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PriceRule {
    pub id: i32,
    pub from_zone: String,
    pub to_zone: String,
    pub amount: f64,
}

impl PriceRule {
    /// Build the quote returned by a route lookup.
    pub fn quote(&self) -> PriceQuote {
        PriceQuote {
            from_zone: self.from_zone.clone(),
            to_zone: self.to_zone.clone(),
            amount: self.amount,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Price rule creation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePriceRule {
    #[serde(alias = "from")]
    #[validate(custom(function = "not_blank", message = "Origin zone cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "A"))]
    pub from_zone: String,
    #[serde(alias = "to")]
    #[validate(custom(function = "not_blank", message = "Destination zone cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "B"))]
    pub to_zone: String,
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    #[cfg_attr(feature = "openapi", schema(example = 12.5))]
    pub amount: f64,
}

impl CreatePriceRule {
    /// Return a copy with both zones normalized.
    pub fn normalized(self) -> Self {
        Self {
            from_zone: normalize_zone(&self.from_zone),
            to_zone: normalize_zone(&self.to_zone),
            amount: self.amount,
        }
    }
}

/// Result of a price lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PriceQuote {
    pub from_zone: String,
    pub to_zone: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_short_aliases() {
        let payload: CreatePriceRule =
            serde_json::from_str(r#"{"from":"a","to":"b","amount":12.5}"#).unwrap();
        let payload = payload.normalized();
        assert_eq!(payload.from_zone, "A");
        assert_eq!(payload.to_zone, "B");
        assert_eq!(payload.amount, 12.5);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let payload = CreatePriceRule {
            from_zone: "A".to_string(),
            to_zone: "B".to_string(),
            amount: -1.0,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn blank_zone_is_rejected() {
        let payload = CreatePriceRule {
            from_zone: "   ".to_string(),
            to_zone: "B".to_string(),
            amount: 3.0,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn quote_carries_default_currency() {
        let rule = PriceRule {
            id: 3,
            from_zone: "A".to_string(),
            to_zone: "B".to_string(),
            amount: 12.5,
        };
        let quote = rule.quote();
        assert_eq!(quote.currency, "CAD");
        assert_eq!(quote.amount, 12.5);
    }
}
