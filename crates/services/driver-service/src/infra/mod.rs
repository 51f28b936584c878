//! Infrastructure layer - schema migrations for the driver store.

pub mod migrations;

pub use migrations::Migrator;
