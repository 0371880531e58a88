//! Tabsight CLI - column inference and data health scoring.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log to stderr so JSON on stdout stays clean. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.analysis.to_config();

    let result = match cli.command {
        Commands::Analyze { file, json, output } => {
            commands::analyze::run(file, json, output, config)
        }

        Commands::Payload {
            file,
            select,
            output,
        } => commands::payload::run(file, select, output, config),

        Commands::Health { file, json } => commands::health::run(file, json, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
