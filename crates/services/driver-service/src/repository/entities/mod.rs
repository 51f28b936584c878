//! SeaORM entities for the driver store.

pub mod driver;
