//! Pricing Service - HTTP server for route prices.

use clap::Parser;

use common::{init_tracing, ServiceCommand};
use domain::PRICING_SERVICE_PORT;

#[derive(Parser)]
#[command(name = "pricing-service")]
#[command(about = "Route pricing microservice")]
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
            let service = args.resolve("PRICING_SERVICE", PRICING_SERVICE_PORT);
            pricing_service_lib::run_embedded(&service.host, service.port).await?;
        }
        ServiceCommand::Migrate { action } => {
            pricing_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
