//! `dns-migrator` entry point
//!
//! ```bash
//! # Migrate every zone listed in zones.txt
//! dns-migrator dynect migrate records --input-file zones.txt
//!
//! # Inspect the source side
//! dns-migrator dynect get zone --zone-name example.com
//! dns-migrator dynect get records --zone-name example.com
//! dns-migrator dynect get statistics --input-file zones.txt
//! ```

mod adapters;
mod cli;
mod commands;
mod input;
mod logging;
mod report;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(&cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "dns-migrator {} {} {}",
        cli.connector.name(),
        cli.command.name(),
        cli.entity.name()
    );

    match commands::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
