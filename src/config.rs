use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::calculator::CostParameters;
use crate::display::DEFAULT_CURRENCY_SYMBOL;
use crate::error::{PlannerError, Result};
use crate::planner::{DEFAULT_TEAM_NAME, DEFAULT_TITLE};

pub const DEFAULT_CONFIG_PATH: &str = "ice-planner.toml";
pub const ENV_PREFIX: &str = "ICE_PLANNER";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub team: TeamConfig,
    /// Parameters the planner starts with
    pub defaults: CostParameters,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamConfig {
    pub name: String,
    pub title: String,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TEAM_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive; RUST_LOG takes precedence
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from `path` (optional) and `ICE_PLANNER__*` variables
pub fn load_config(path: &Path) -> Result<Config> {
    // No try_parsing: team names like "007" must stay text
    let env = config::Environment::with_prefix(ENV_PREFIX).separator("__");
    load_config_with_env(path, env)
}

fn load_config_with_env(path: &Path, env: config::Environment) -> Result<Config> {
    let settings = config::Config::builder()
        .add_source(
            config::File::from(path.to_path_buf())
                .format(config::FileFormat::Toml)
                .required(false),
        )
        .add_source(env)
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Render the configuration back to TOML
pub fn to_toml(cfg: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Checks the settings around the calculator
///
/// Cost parameters are deliberately left alone: any number is accepted.
pub fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.display.currency_symbol.trim().is_empty() {
        return Err(PlannerError::InvalidConfig(
            "display.currency_symbol cannot be empty".to_string(),
        ));
    }

    if let Err(e) = EnvFilter::try_new(&cfg.logging.level) {
        return Err(PlannerError::InvalidConfig(format!(
            "logging.level '{}' is not a valid filter: {}",
            cfg.logging.level, e
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(config::Map::new()))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_with_env(&dir.path().join("absent.toml"), no_env()).unwrap();

        assert_eq!(cfg.team.name, "My Team");
        assert_eq!(cfg.team.title, "Ice Planner");
        assert_eq!(cfg.defaults, CostParameters::default());
        assert_eq!(cfg.display.currency_symbol, "$");
        assert_eq!(cfg.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
[team]
name = "Ice Hawks"

[defaults]
ice_cost = 250.0
players = 15

[logging]
format = "json"
"#,
        );

        let cfg = load_config_with_env(file.path(), no_env()).unwrap();

        assert_eq!(cfg.team.name, "Ice Hawks");
        assert_eq!(cfg.team.title, "Ice Planner");
        assert_eq!(cfg.defaults.ice_cost, 250.0);
        assert_eq!(cfg.defaults.players, 15.0);
        // untouched keys keep their defaults
        assert_eq!(cfg.defaults.slots, 50.0);
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[defaults]\nplayers = 15\n");

        let mut vars = config::Map::new();
        vars.insert("ICE_PLANNER__DEFAULTS__PLAYERS".to_string(), "20".to_string());
        vars.insert(
            "ICE_PLANNER__DISPLAY__CURRENCY_SYMBOL".to_string(),
            "€".to_string(),
        );
        let env = no_env().source(Some(vars));

        let cfg = load_config_with_env(file.path(), env).unwrap();

        assert_eq!(cfg.defaults.players, 20.0);
        assert_eq!(cfg.display.currency_symbol, "€");
    }

    #[test]
    fn test_env_text_values_are_kept_verbatim() {
        let mut vars = config::Map::new();
        vars.insert("ICE_PLANNER__TEAM__NAME".to_string(), "007".to_string());
        vars.insert(
            "ICE_PLANNER__DISPLAY__CURRENCY_SYMBOL".to_string(),
            "1.50".to_string(),
        );
        vars.insert("ICE_PLANNER__DEFAULTS__SLOTS".to_string(), "12.5".to_string());
        let env = no_env().source(Some(vars));

        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_with_env(&dir.path().join("absent.toml"), env).unwrap();

        assert_eq!(cfg.team.name, "007");
        assert_eq!(cfg.display.currency_symbol, "1.50");
        assert_eq!(cfg.defaults.slots, 12.5);
    }

    #[test]
    fn test_negative_defaults_are_accepted() {
        let file = write_config("[defaults]\nslots = -5\njerseys = -1.5\n");
        let cfg = load_config_with_env(file.path(), no_env()).unwrap();

        assert_eq!(cfg.defaults.slots, -5.0);
        assert_eq!(cfg.defaults.jerseys, -1.5);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let file = write_config("[logging]\nformat = \"yaml\"\n");
        let result = load_config_with_env(file.path(), no_env());

        assert!(matches!(result, Err(PlannerError::Config(_))));
    }

    #[test]
    fn test_validate_config_requires_currency_symbol() {
        let mut cfg = Config::default();
        cfg.display.currency_symbol = "  ".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("display.currency_symbol cannot be empty"));
    }

    #[test]
    fn test_validate_config_rejects_bad_log_level() {
        let mut cfg = Config::default();
        cfg.logging.level = "ice_planner=loud".to_string();

        let result = validate_config(&cfg);
        assert!(matches!(result, Err(PlannerError::InvalidConfig(_))));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut cfg = Config::default();
        cfg.team.name = "Ice Hawks".to_string();

        let rendered = to_toml(&cfg).unwrap();
        assert!(rendered.contains("[defaults]"));
        assert!(rendered.contains("name = \"Ice Hawks\""));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.defaults, cfg.defaults);
        assert_eq!(parsed.team.name, "Ice Hawks");
    }
}
