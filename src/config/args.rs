//! Command-line arguments.
//!
//! chatd takes at most one argument: either `--opt-pass=<password>` to set
//! the operator password directly, or `--config=<path>` to load a TOML
//! file.

use super::{Config, ConfigError};
use std::path::PathBuf;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupArgs {
    /// No arguments: defaults, no operator password.
    Defaults,
    /// `--opt-pass=<password>`.
    OperatorPassword(String),
    /// `--config=<path>`.
    ConfigFile(PathBuf),
}

impl StartupArgs {
    /// Parse the arguments that follow the executable name.
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(arg) = args.next() else {
            return Ok(Self::Defaults);
        };
        if args.next().is_some() {
            return Err(ConfigError::TooManyArguments);
        }

        if let Some(password) = arg.strip_prefix("--opt-pass=") {
            Ok(Self::OperatorPassword(password.to_owned()))
        } else if let Some(path) = arg.strip_prefix("--config=") {
            Ok(Self::ConfigFile(PathBuf::from(path)))
        } else {
            Err(ConfigError::UnrecognizedOption(arg))
        }
    }

    /// Turn the arguments into an unvalidated configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        match self {
            Self::Defaults => Ok(Config::default()),
            Self::OperatorPassword(password) => {
                let mut config = Config::default();
                config.operator.password = Some(password);
                Ok(config)
            }
            Self::ConfigFile(path) => Config::load(path),
        }
    }
}
