use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use ice_planner::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let command = args.get_command();

    // Logging settings come from the config file; a broken file is reported
    // by the command itself, so fall back to defaults here
    let logging = config::load_config(&args.config)
        .map(|cfg| cfg.logging)
        .unwrap_or_default();

    init_tracing(log_level_for(&command, &logging.level), logging.format);

    // Dispatch to appropriate command handler
    match command {
        cli::Commands::Interactive => {
            commands::interactive::execute(&args.config)?;
        }
        cli::Commands::Compute(compute_args) => {
            commands::compute::execute(&args.config, compute_args)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Ice Planner v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Filter for the command; RUST_LOG still overrides it
///
/// The form owns the terminal and stderr draws over it, so logging is off.
fn log_level_for<'a>(command: &cli::Commands, configured: &'a str) -> &'a str {
    match command {
        cli::Commands::Interactive => "off",
        _ => configured,
    }
}
