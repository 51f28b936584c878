//! Payment Service Library
//!
//! This crate provides the payment ledger over HTTP/JSON.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{Database, MigrateAction};

use crate::config::PaymentServiceConfig;
use crate::infra::Migrator;
use crate::routes::create_router;
use crate::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the payment service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), BoxError> {
    let mut config = PaymentServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), BoxError> {
    let config = PaymentServiceConfig::from_env();
    common::run_migration_action::<Migrator>(&config.database, action).await?;
    Ok(())
}

/// Build the HTTP application over an existing connection.
pub fn app(db: DatabaseConnection) -> Router {
    create_router(AppState::from_connection(db)).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: PaymentServiceConfig) -> Result<(), BoxError> {
    let db = Database::connect::<Migrator>(&config.database).await?;

    let app = app(db.get_connection());

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Payment service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
