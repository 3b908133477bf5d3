//! Compute command implementation
//!
//! Runs the calculation once with the configured defaults plus any
//! overrides given on the command line.

use anyhow::Result;
use colored::Colorize;
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use ice_planner::{
    compute_breakdown,
    config::{self, Config},
    input, CostBreakdown, CostDisplay, CostParameters, Field,
};

use crate::cli::ComputeArgs;

/// One run of the calculation
#[derive(Debug)]
struct ComputeReport {
    title: String,
    team: String,
    params: CostParameters,
    breakdown: CostBreakdown,
}

impl ComputeReport {
    fn to_json(&self) -> Value {
        let p = &self.params;
        let b = &self.breakdown;
        json!({
            "team": self.team,
            "params": {
                "ice_cost": json_amount(p.ice_cost),
                "slots": json_amount(p.slots),
                "fee": json_amount(p.fee),
                "coaches": json_amount(p.coaches),
                "jerseys": json_amount(p.jerseys),
                "players": json_amount(p.players),
            },
            "breakdown": {
                "ice": json_amount(b.ice),
                "base": json_amount(b.base),
                "fee_amount": json_amount(b.fee_amount),
                "total": json_amount(b.total),
                "per_player": json_amount(b.per_player),
            },
        })
    }
}

/// Execute the compute command
pub fn execute(config_path: &Path, args: ComputeArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let report = build_report(&cfg, &args);

    info!(
        team = %report.team,
        total = report.breakdown.total,
        per_player = report.breakdown.per_player,
        "Cost computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
        return Ok(());
    }

    let display = CostDisplay::new(cfg.display.currency_symbol.clone());
    print_report(&report, &display);
    Ok(())
}

/// Resolve parameters and compute the breakdown once
fn build_report(cfg: &Config, args: &ComputeArgs) -> ComputeReport {
    let params = resolve_params(cfg.defaults, args);

    ComputeReport {
        title: cfg.team.title.clone(),
        team: args.team.clone().unwrap_or_else(|| cfg.team.name.clone()),
        params,
        breakdown: compute_breakdown(&params),
    }
}

/// JSON number for finite values; NaN and infinities become the strings
/// "NaN", "inf" and "-inf" instead of an ambiguous null
fn json_amount(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}

/// Apply command-line overrides on top of the configured defaults
fn resolve_params(defaults: CostParameters, args: &ComputeArgs) -> CostParameters {
    let mut params = defaults;

    let overrides = [
        (Field::IceCost, args.ice_cost),
        (Field::Slots, args.slots),
        (Field::FeePercent, args.fee_percent),
        (Field::Coaches, args.coaches),
        (Field::Jerseys, args.jerseys),
        (Field::Players, args.players),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.write(&mut params, value);
        }
    }

    if let Some(fee) = args.fee {
        params.fee = fee;
    }

    params
}

fn print_report(report: &ComputeReport, display: &CostDisplay) {
    let params = &report.params;
    let breakdown = &report.breakdown;

    println!("{}", report.title.green().bold());
    println!("  {}: {}", "Team".cyan(), report.team);
    println!();

    println!("{}", "Inputs:".bold());
    for field in Field::ALL {
        println!(
            "  {:<20} {}",
            format!("{}:", field.label()).cyan(),
            input::format_input(field.read(params))
        );
    }
    println!();

    println!("{}", "Breakdown:".bold());
    println!("  {:<20} {}", "Ice:".cyan(), display.format_amount(breakdown.ice));
    println!("  {:<20} {}", "Base:".cyan(), display.format_amount(breakdown.base));
    println!("  {:<20} {}", "Fee:".cyan(), display.format_amount(breakdown.fee_amount));
    println!();

    let lines = display.summary_lines(&breakdown.result());
    println!("{}", lines[0].bold());
    println!("  {:<20} {}", lines[1].cyan(), lines[2].yellow().bold());
    println!("  {:<20} {}", lines[3].cyan(), lines[4].yellow().bold());
}
