//! Rotaguard CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rotaguard::cli::{Cli, Commands};
use rotaguard::infrastructure::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let logging = ConfigLoader::load().map(|c| c.logging).unwrap_or_default();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.level));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => rotaguard::cli::commands::init::execute(args, cli.json).await,
        Commands::Officer(cmd) => rotaguard::cli::commands::officer::execute(cmd, cli.json).await,
        Commands::Rota(cmd) => rotaguard::cli::commands::rota::execute(cmd, cli.json).await,
    };

    if let Err(err) = result {
        rotaguard::cli::handle_error(err, cli.json);
    }
}
