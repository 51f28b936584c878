//! Ride Service - HTTP server for ride booking.

use clap::Parser;

use common::{init_tracing, ServiceCommand};
use domain::RIDE_SERVICE_PORT;

#[derive(Parser)]
#[command(name = "ride-service")]
#[command(about = "Ride orchestration microservice")]
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
            let service = args.resolve("RIDE_SERVICE", RIDE_SERVICE_PORT);
            ride_service_lib::run_standalone(&service.host, service.port).await?;
        }
        ServiceCommand::Migrate { action } => {
            ride_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
