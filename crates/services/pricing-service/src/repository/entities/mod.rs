//! SeaORM entities for the pricing store.

pub mod pricing_rule;
