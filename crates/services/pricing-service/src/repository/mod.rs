//! Repository layer for data access.

pub mod entities;
mod price_repository;

pub use price_repository::{PriceRepository, PriceStore};

#[cfg(any(test, feature = "test-utils"))]
pub use price_repository::MockPriceRepository;
