pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod planner;
pub mod ui;

pub use calculator::{compute, compute_breakdown, CostBreakdown, CostParameters, CostResult};
pub use display::CostDisplay;
pub use input::Field;
pub use planner::{CostObserver, Planner};

use crate::config::LogFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over `default_level`. Logs go to stderr so command
/// output on stdout stays clean.
///
/// Note: This function can only be called once.
pub fn init_tracing(default_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Build a planner from loaded configuration
pub fn planner_from_config(cfg: &crate::config::Config) -> Planner {
    Planner::new(cfg.defaults)
        .with_title(cfg.team.title.clone())
        .with_team_name(cfg.team.name.clone())
}
