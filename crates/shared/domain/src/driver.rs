//! Driver entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Driver as stored by the driver registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Driver {
    /// Unique driver identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Zone the driver currently operates in
    pub zone: String,
    /// Whether the driver can take a ride
    pub available: bool,
}

/// Driver registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateDriver {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Zone cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "A"))]
    pub zone: String,
    /// Defaults to `true` when omitted
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Availability toggle payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateAvailability {
    pub available: bool,
}

/// Optional filters for listing drivers. Present predicates are AND'd.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverFilter {
    pub available: Option<bool>,
    pub zone: Option<String>,
}
