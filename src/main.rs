//! chatd - a small multi-user chat server.
//!
//! Speaks a line-based text protocol over TCP: registration with `USER`,
//! channels, direct and channel messages, and a password-gated operator
//! who can `KICK`.

mod config;
mod error;
mod handlers;
mod network;
mod state;

use crate::config::Config;
use crate::network::Gateway;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // stdout carries the port number, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(
        address = %config.listen.address,
        operator = config.operator.password.is_some(),
        "Starting chatd"
    );

    let gateway = Gateway::bind(&config).await.map_err(|e| {
        error!(address = %config.listen.address, error = %e, "Failed to bind listener");
        e
    })?;

    let addr = gateway.local_addr()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", addr.port())?;
    stdout.flush()?;
    drop(stdout);

    gateway.run().await?;

    Ok(ExitCode::SUCCESS)
}
