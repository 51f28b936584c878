//! Payment Service - HTTP server for payment authorization and capture.

use clap::Parser;

use common::{init_tracing, ServiceCommand};
use domain::PAYMENT_SERVICE_PORT;

#[derive(Parser)]
#[command(name = "payment-service")]
#[command(about = "Payment microservice")]
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
            let service = args.resolve("PAYMENT_SERVICE", PAYMENT_SERVICE_PORT);
            payment_service_lib::run_embedded(&service.host, service.port).await?;
        }
        ServiceCommand::Migrate { action } => {
            payment_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
