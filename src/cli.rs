use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ice_planner::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "ice-planner", version, about = "Ice time cost planner")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Edit the plan in an interactive form (default)
    Interactive,

    /// Compute the cost once and print it
    Compute(ComputeArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

/// Overrides on top of the configured defaults
#[derive(Args, Debug, Clone, Default)]
pub struct ComputeArgs {
    /// Dollars per ice-time slot (hour)
    #[arg(long, allow_negative_numbers = true)]
    pub ice_cost: Option<f64>,

    /// Number of slots (hours) booked
    #[arg(long, allow_negative_numbers = true)]
    pub slots: Option<f64>,

    /// Fee rate as a percentage, e.g. 2 for 2%
    #[arg(long, allow_negative_numbers = true, conflicts_with = "fee")]
    pub fee_percent: Option<f64>,

    /// Fee rate as a fraction, e.g. 0.02 for 2%
    #[arg(long, allow_negative_numbers = true)]
    pub fee: Option<f64>,

    /// Flat coaching fee in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub coaches: Option<f64>,

    /// Jersey cost per player in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub jerseys: Option<f64>,

    /// Number of players sharing the cost
    #[arg(long, allow_negative_numbers = true)]
    pub players: Option<f64>,

    /// Team name shown in the summary
    #[arg(long)]
    pub team: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Interactive if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}
