use thiserror::Error;

/// Errors raised while setting the planner up
///
/// The cost calculation itself never fails; these cover configuration
/// and I/O around it.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was read but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
