//! Common utilities shared across all RideNow services.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Configuration structures
//! - Database connection, migrations and transaction scope
//! - The service binaries' CLI and log setup
//! - Request extractors with JSON rejections and the health route

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;
pub mod extractors;
pub mod health;

#[cfg(feature = "cli")]
pub use cli::{init_tracing, MigrateCommand, ServeArgs, ServiceCommand};
pub use config::*;
#[cfg(feature = "database")]
pub use db::{run_migration_action, transaction, Database, MigrateAction};
pub use error::{AppError, AppResult, ErrorResponse, OptionExt};
pub use extractors::{ApiPath, ApiQuery, ValidatedJson};
pub use health::{health_routes, HealthResponse};
