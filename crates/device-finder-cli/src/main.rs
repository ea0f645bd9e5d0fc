//! Device Finder CLI - Command-line interface for device discovery.
//!
//! This tool provides terminal access to the discovery API and the sidebar
//! view logic, enabling automation via scripts and headless operation.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Scan(args) => {
            commands::run_scan(args, &cli.api_url, cli.timeout, cli.json).await
        }
        Commands::Bluetooth(args) => {
            commands::run_bluetooth(args, &cli.api_url, cli.timeout, cli.json).await
        }
        Commands::List(args) => {
            commands::run_list(args, &cli.api_url, cli.timeout, cli.json).await
        }
    }
}
