//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are the JSON contract shared between the RideNow services.

pub mod constants;
pub mod driver;
pub mod error;
pub mod payment;
pub mod pricing;
pub mod ride;
pub mod validation;

pub use constants::*;
pub use driver::{CreateDriver, Driver, DriverFilter, UpdateAvailability};
pub use error::{DomainError, DomainResult};
pub use payment::{AuthorizePayment, CapturePayment, Payment, PaymentReceipt, PaymentStatus};
pub use pricing::{CreatePriceRule, PriceQuote, PriceRule};
pub use ride::{
    CreateRide, DriverSummary, NewRide, PaymentSummary, Ride, RideResponse, RideStatus,
};
