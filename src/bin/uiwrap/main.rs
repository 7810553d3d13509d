//! uiwrap CLI - declares generator rules for UI interface definitions

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("uiwrap=debug")
    } else {
        EnvFilter::new("uiwrap=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let global = cli.global;

    // Execute command
    match cli.command {
        Commands::Configure(args) => commands::configure::execute(&global, args),
        Commands::Files(args) => commands::files::execute(&global, args),
        Commands::Order(args) => commands::order::execute(&global, args),
    }
}
