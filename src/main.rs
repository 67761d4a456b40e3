//! HealthOps server binary

#![allow(missing_docs)]

use clap::Parser;
use healthops::config::Config;
use healthops::server;
use healthops::utils::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Healthcare back-office authentication and access control service
#[derive(Debug, Parser)]
#[command(name = "healthops", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "HEALTHOPS_CONFIG",
        default_value = "config/healthops.yaml"
    )]
    config: PathBuf,

    /// Run database migrations before serving
    #[arg(long)]
    migrate: bool,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if cli.check_config {
        return match config.to_yaml() {
            Ok(yaml) => {
                println!("{}", yaml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match server::builder::run_with_config(config, cli.migrate).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, to keep multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
