//! Service layer - ride orchestration.

mod ride_service;

pub use ride_service::{RideOrchestrator, RideService};
