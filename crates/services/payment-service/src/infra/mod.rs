//! Infrastructure layer - schema migrations for the payment ledger.

pub mod migrations;

pub use migrations::Migrator;
