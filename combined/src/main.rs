//! Combined binary for development - runs all four services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use common::{connect_host, init_tracing, MigrateCommand};
use ride_service_lib::DownstreamUrls;

#[derive(Parser)]
#[command(name = "ridenow")]
#[command(about = "Combined RideNow services binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8001")]
        driver_port: u16,
        #[arg(long, default_value = "8002")]
        pricing_port: u16,
        #[arg(long, default_value = "8003")]
        payment_port: u16,
        #[arg(long, default_value = "8004")]
        ride_port: u16,
    },
    /// Run database migrations for all services
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            driver_port,
            pricing_port,
            payment_port,
            ride_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Drivers: http://{}:{}", host, driver_port);
            info!("  Pricing: http://{}:{}", host, pricing_port);
            info!("  Payment: http://{}:{}", host, payment_port);
            info!("  Rides:   http://{}:{}", host, ride_port);

            let driver_host = host.clone();
            let driver_handle = tokio::spawn(async move {
                if let Err(e) = driver_service_lib::run_embedded(&driver_host, driver_port).await {
                    error!("Driver service failed: {}", e);
                }
            });

            let pricing_host = host.clone();
            let pricing_handle = tokio::spawn(async move {
                if let Err(e) = pricing_service_lib::run_embedded(&pricing_host, pricing_port).await
                {
                    error!("Pricing service failed: {}", e);
                }
            });

            let payment_host = host.clone();
            let payment_handle = tokio::spawn(async move {
                if let Err(e) = payment_service_lib::run_embedded(&payment_host, payment_port).await
                {
                    error!("Payment service failed: {}", e);
                }
            });

            // The ride service only calls the others per request, so no startup ordering
            let target = connect_host(&host).to_string();
            let urls = DownstreamUrls {
                drivers: format!("http://{}:{}", target, driver_port),
                pricing: format!("http://{}:{}", target, pricing_port),
                payment: format!("http://{}:{}", target, payment_port),
            };
            let ride_host = host.clone();
            let ride_handle = tokio::spawn(async move {
                if let Err(e) = ride_service_lib::run_embedded(&ride_host, ride_port, urls).await {
                    error!("Ride service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = driver_handle => {
                    error!("Driver service exited unexpectedly");
                }
                _ = pricing_handle => {
                    error!("Pricing service exited unexpectedly");
                }
                _ = payment_handle => {
                    error!("Payment service exited unexpectedly");
                }
                _ = ride_handle => {
                    error!("Ride service exited unexpectedly");
                }
            }
        }
        Commands::Migrate { action } => {
            driver_service_lib::run_migrations(action.into()).await?;
            pricing_service_lib::run_migrations(action.into()).await?;
            payment_service_lib::run_migrations(action.into()).await?;
            ride_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
