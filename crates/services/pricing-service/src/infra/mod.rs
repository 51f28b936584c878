//! Infrastructure layer - schema migrations for the pricing store.

pub mod migrations;

pub use migrations::Migrator;
