//! Test server management.
//!
//! Spawns chatd instances for integration testing. The server prints its
//! port on stdout; logs go to stderr, which is discarded.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Output, Stdio};

/// A test server instance.
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    /// Spawn a server without an operator password.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with_args(&[]).await
    }

    /// Spawn a server with `--opt-pass=<password>`.
    #[allow(dead_code)]
    pub async fn spawn_with_password(password: &str) -> anyhow::Result<Self> {
        Self::spawn_with_args(&[format!("--opt-pass={password}")]).await
    }

    /// Spawn a server with the given arguments and wait for its port.
    pub async fn spawn_with_args(args: &[String]) -> anyhow::Result<Self> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_chatd"))
            .args(args)
            .env("RUST_LOG", "warn")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let Some(stdout) = child.stdout.take() else {
            anyhow::bail!("server stdout not captured");
        };

        // The port line is written right after bind; read it off the runtime.
        let line = tokio::task::spawn_blocking(move || {
            let mut line = String::new();
            BufReader::new(stdout).read_line(&mut line).map(|_| line)
        })
        .await??;

        let port = match line.trim().parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                anyhow::bail!("server did not print a port, got {line:?}");
            }
        };

        Ok(Self { child, port })
    }

    /// Run the binary to completion, for startup failures.
    #[allow(dead_code)]
    pub fn run_to_exit(args: &[&str]) -> anyhow::Result<Output> {
        Ok(Command::new(env!("CARGO_BIN_EXE_chatd"))
            .args(args)
            .stderr(Stdio::null())
            .output()?)
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Connect a client without registering it.
    pub async fn connect(&self) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.address()).await
    }

    /// Connect a client and register it as `nick`.
    pub async fn register(&self, nick: &str) -> anyhow::Result<super::client::TestClient> {
        let mut client = self.connect().await?;
        client.register(nick).await?;
        Ok(client)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
