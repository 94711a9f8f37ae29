// AcademiX Teams - command-line client

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use academix_app::cli::Cli;
use academix_common::config::{log_filter, Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e.user_message());
            debug!(code = e.error_code(), "Configuration error");
            return ExitCode::FAILURE;
        }
    };

    info!(provider = %config.api_provider, "Starting AcademiX teams client");

    match academix_app::run(cli, &config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let (code, message) = academix_app::failure(&e);
            debug!(code, error = %e, "Command failed");
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
