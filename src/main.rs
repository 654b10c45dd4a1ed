//! Comanda CLI - restaurant menu, orders and end-of-day closing
//!
//! Usage: comanda [OPTIONS] [COMMAND]
//!
//! Commands:
//!   dish    Manage menu dishes
//!   orders  Create orders and manage stored tickets
//!
//! Without a command, Comanda starts the interactive session.

mod commands;

use anyhow::Result;
use clap::Parser;

use comanda::presentation::{Cli, Commands, OutputFormat};

fn main() {
    if let Err(err) = run() {
        eprint!("{}", commands::format_error(&err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let (mut config, warnings) = comanda::Config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(dir) = &cli.data_dir {
        config.storage.root = dir.clone();
    }
    config.output.verbosity = config.output.verbosity.raised(cli.verbose);
    comanda::logging::init(config.output.verbosity);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let format = OutputFormat::from_json_flag(cli.json);
    match cli.command {
        Some(Commands::Dish { command }) => commands::dish::run(command, &config, format),
        Some(Commands::Orders { command }) => commands::orders::run(command, &config, format),
        None => commands::interactive::run(&config, format),
    }
}
