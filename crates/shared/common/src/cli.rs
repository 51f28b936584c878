//! Command-line pieces shared by the service binaries.

use clap::{Args, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;
use crate::db::MigrateAction;

/// Top-level command of a single-service binary.
#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },
}

/// Bind overrides for `serve`. Unset values fall back to `<PREFIX>_HOST` / `<PREFIX>_PORT`.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Resolve the bind address: flag, then environment, then default.
    pub fn resolve(self, prefix: &str, default_port: u16) -> ServiceConfig {
        let mut config = ServiceConfig::from_env(prefix, default_port);
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum MigrateCommand {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateCommand> for MigrateAction {
    fn from(command: MigrateCommand) -> Self {
        match command {
            MigrateCommand::Up => MigrateAction::Up,
            MigrateCommand::Down => MigrateAction::Down,
            MigrateCommand::Status => MigrateAction::Status,
            MigrateCommand::Fresh => MigrateAction::Fresh,
        }
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: ServiceCommand,
    }

    #[test]
    fn parses_migrate_subcommands() {
        let cli = TestCli::try_parse_from(["svc", "migrate", "down"]).unwrap();
        match cli.command {
            ServiceCommand::Migrate { action } => {
                assert_eq!(MigrateAction::from(action), MigrateAction::Down)
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn serve_flags_override_defaults() {
        let cli = TestCli::try_parse_from(["svc", "serve", "--port", "9101"]).unwrap();
        let ServiceCommand::Serve(args) = cli.command else {
            panic!("expected serve");
        };

        let config = args.resolve("CLI_TEST_UNSET", 8001);
        assert_eq!(config.port, 9101);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn serve_without_flags_uses_default_port() {
        let config = ServeArgs::default().resolve("CLI_TEST_UNSET", 8004);
        assert_eq!(config.bind_address(), "0.0.0.0:8004");
    }
}
