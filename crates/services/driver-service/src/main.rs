//! Driver Service - HTTP server for the driver registry.

use clap::Parser;

use common::{init_tracing, ServiceCommand};
use domain::DRIVER_SERVICE_PORT;

#[derive(Parser)]
#[command(name = "driver-service")]
#[command(about = "Driver registry microservice")]
struct Cli {
    #[command(subcommand)]
    command: ServiceCommand,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    match Cli::parse().command {
        ServiceCommand::Serve(args) => {
            let service = args.resolve("DRIVER_SERVICE", DRIVER_SERVICE_PORT);
            driver_service_lib::run_embedded(&service.host, service.port).await?;
        }
        ServiceCommand::Migrate { action } => {
            driver_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
