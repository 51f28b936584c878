//! Service layer - driver registry use cases.

mod driver_service;

pub use driver_service::{DriverManager, DriverService};
