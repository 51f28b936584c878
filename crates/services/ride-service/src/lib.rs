//! Ride Service Library
//!
//! This crate books rides by calling the driver, pricing and payment services
//! and keeps the resulting ride records. It can be run as a standalone service
//! or embedded in the combined binary.

pub mod clients;
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

use common::{AppResult, Database, DownstreamConfig, MigrateAction};

use crate::config::RideServiceConfig;
use crate::infra::Migrator;
use crate::routes::create_router;
use crate::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Base URLs of the services a ride depends on.
#[derive(Debug, Clone)]
pub struct DownstreamUrls {
    pub drivers: String,
    pub pricing: String,
    pub payment: String,
}

/// Run the ride service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16, urls: DownstreamUrls) -> Result<(), BoxError> {
    let mut config = RideServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    config.drivers = DownstreamConfig::new(urls.drivers);
    config.pricing = DownstreamConfig::new(urls.pricing);
    config.payment = DownstreamConfig::new(urls.payment);
    run_server_with_config(config).await
}

/// Run the ride service with its own configuration (standalone binary).
pub async fn run_standalone(host: &str, port: u16) -> Result<(), BoxError> {
    let mut config = RideServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), BoxError> {
    let config = RideServiceConfig::from_env();
    common::run_migration_action::<Migrator>(&config.database, action).await?;
    Ok(())
}

/// Build the HTTP application over an existing connection.
pub fn app(db: DatabaseConnection, config: &RideServiceConfig) -> AppResult<Router> {
    let state = AppState::from_config(db, config)?;
    Ok(create_router(state).layer(TraceLayer::new_for_http()))
}

async fn run_server_with_config(config: RideServiceConfig) -> Result<(), BoxError> {
    let db = Database::connect::<Migrator>(&config.database).await?;

    info!(
        drivers = %config.drivers.base_url,
        pricing = %config.pricing.base_url,
        payment = %config.payment.base_url,
        "Downstream services"
    );
    let app = app(db.get_connection(), &config)?;

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Ride service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
