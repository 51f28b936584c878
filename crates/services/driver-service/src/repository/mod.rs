//! Repository layer for data access.

pub mod entities;
mod driver_repository;

pub use driver_repository::{DriverRepository, DriverStore};

#[cfg(any(test, feature = "test-utils"))]
pub use driver_repository::MockDriverRepository;
