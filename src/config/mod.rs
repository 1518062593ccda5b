//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: The top-level [`Config`] and [`ConfigError`]
//! - [`args`]: Command-line parsing (`--opt-pass=` / `--config=`)
//! - [`listen`]: Listener address
//! - [`oper`]: The server-wide operator password
//! - [`limits`]: Queue capacities
//! - [`validation`]: Startup checks

mod args;
mod defaults;
mod limits;
mod listen;
mod oper;
mod types;
mod validation;

pub use args::StartupArgs;
pub use limits::LimitsConfig;
pub use listen::ListenConfig;
pub use oper::OperatorConfig;
pub use types::{Config, ConfigError};
pub use validation::{ValidationError, validate};
