//! sdkfind CLI - locate installed geometry-modeling toolkits

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
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("sdkfind=debug")
    } else {
        EnvFilter::new("sdkfind=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let color = !cli.no_color;

    match cli.command {
        Commands::Locate(args) => commands::locate::execute(args, &config, color),
        Commands::Flags(args) => commands::flags::execute(args, &config, color),
        Commands::Components => commands::components::execute(&config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
