use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use ice_planner::{
    compute,
    config::{self, Config},
    CostDisplay,
};

/// Execute the config show command
///
/// Displays the effective configuration (file plus environment overrides)
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!(path = %config_path.display(), "Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", config::to_toml(&cfg)?);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!(path = %config_path.display(), "Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    if !config_path.exists() {
        println!(
            "  {}",
            format!("{} not found, using built-in defaults", config_path.display()).dimmed()
        );
    }
    println!();
    println!("{}", "Summary:".bold());
    for line in summary(&cfg) {
        println!("  {}", line);
    }

    info!("Configuration validation successful");
    Ok(())
}

/// Short description of what the configuration will produce
fn summary(cfg: &Config) -> Vec<String> {
    let display = CostDisplay::new(cfg.display.currency_symbol.clone());
    let result = compute(&cfg.defaults);

    vec![
        format!("Title: {}", cfg.team.title),
        format!("Team: {}", cfg.team.name),
        format!("Currency: {}", cfg.display.currency_symbol),
        format!("Log: {} ({:?})", cfg.logging.level, cfg.logging.format),
        format!(
            "Default total: {} ({} per player)",
            display.format_amount(result.total),
            display.format_amount(result.per_player)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_defaults() {
        let cfg = Config::default();
        let lines = summary(&cfg);

        assert_eq!(lines[0], "Title: Ice Planner");
        assert_eq!(lines[1], "Team: My Team");
        assert_eq!(lines[3], "Log: info (Text)");
        assert_eq!(lines[4], "Default total: $18449.76 ($18449.76 per player)");
    }
}
