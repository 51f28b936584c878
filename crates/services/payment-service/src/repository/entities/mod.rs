//! SeaORM entities for the payment ledger.

pub mod payment;
