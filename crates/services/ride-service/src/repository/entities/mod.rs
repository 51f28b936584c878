//! SeaORM entities for the ride store.

pub mod ride;
