//! Domain-level constants.
//!
//! These constants define business rules shared by every RideNow service.

// =============================================================================
// Payments
// =============================================================================

/// Currency used when a caller does not specify one
pub const DEFAULT_CURRENCY: &str = "CAD";

/// Payment has been authorized but not yet captured
pub const PAYMENT_STATUS_AUTHORIZED: &str = "AUTHORIZED";

/// Payment has been captured (final)
pub const PAYMENT_STATUS_CAPTURED: &str = "CAPTURED";

// =============================================================================
// Rides
// =============================================================================

/// Ride persisted, payment not yet authorized
pub const RIDE_STATUS_PENDING: &str = "PENDING";

/// Ride persisted and payment authorized
pub const RIDE_STATUS_CONFIRMED: &str = "CONFIRMED";

// =============================================================================
// Service identity
// =============================================================================

pub const DRIVER_SERVICE_NAME: &str = "drivers";
pub const PRICING_SERVICE_NAME: &str = "pricing";
pub const PAYMENT_SERVICE_NAME: &str = "payment";
pub const RIDE_SERVICE_NAME: &str = "ride";

pub const DRIVER_SERVICE_PORT: u16 = 8001;
pub const PRICING_SERVICE_PORT: u16 = 8002;
pub const PAYMENT_SERVICE_PORT: u16 = 8003;
pub const RIDE_SERVICE_PORT: u16 = 8004;

/// Normalize a zone label the way the pricing table and ride records store it.
pub fn normalize_zone(zone: &str) -> String {
    zone.trim().to_uppercase()
}
