//! Core configuration types.

use super::{LimitsConfig, ListenConfig, OperatorConfig, ValidationError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Usage line printed after command-line errors.
pub const USAGE: &str = "Usage: <executable> [--opt-pass=<password>] [--config=<path>]";

/// Configuration errors. All of them abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Too many arguments provided.\n{usage}", usage = USAGE)]
    TooManyArguments,
    #[error("Unrecognized option: {0}\n{usage}", usage = USAGE)]
    UnrecognizedOption(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub operator: OperatorConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the startup configuration from the process arguments
    /// (executable name already skipped), then validate it.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let config = super::StartupArgs::parse(args)?.into_config()?;
        super::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}
