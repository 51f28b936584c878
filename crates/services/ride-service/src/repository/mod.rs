//! Repository layer for data access.

pub mod entities;
mod ride_repository;

pub use ride_repository::{RideRepository, RideStore};

#[cfg(any(test, feature = "test-utils"))]
pub use ride_repository::MockRideRepository;
