//! Infrastructure layer - schema migrations for the ride store.

pub mod migrations;

pub use migrations::Migrator;
