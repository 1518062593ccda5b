//! Test chat client.
//!
//! Sends raw lines and reads replies one line at a time, newline stripped.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// How long to wait before deciding nothing else is coming.
const QUIET: Duration = Duration::from_millis(200);

/// A test chat client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;

        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        })
    }

    /// Send one line, adding the newline.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.send_raw(format!("{line}\n").as_bytes()).await
    }

    /// Send bytes exactly as given.
    pub async fn send_raw(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single line from the server.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a line with a timeout. EOF is an error.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("connection closed");
        }
        Ok(line.trim_end_matches('\n').to_string())
    }

    /// Receive `count` lines.
    pub async fn recv_lines(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// Assert nothing arrives for a short while.
    pub async fn expect_silence(&mut self) -> anyhow::Result<()> {
        match self.recv_timeout(QUIET).await {
            Ok(line) => anyhow::bail!("unexpected line: {line:?}"),
            Err(e) if e.is::<tokio::time::error::Elapsed>() => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Wait for the server to close the connection.
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
        if n != 0 {
            anyhow::bail!("expected close, got {line:?}");
        }
        Ok(())
    }

    /// Register and consume the welcome.
    pub async fn register(&mut self, nick: &str) -> anyhow::Result<()> {
        self.send(&format!("USER {nick}")).await?;
        let welcome = self.recv().await?;
        if welcome != format!("Welcome, {nick}.") {
            anyhow::bail!("Registration failed: {welcome:?}");
        }
        Ok(())
    }

    /// Send a command and return the single reply line.
    #[allow(dead_code)]
    pub async fn request(&mut self, line: &str) -> anyhow::Result<String> {
        self.send(line).await?;
        self.recv().await
    }

    /// Send a command and check that nothing comes back.
    ///
    /// Replies to earlier commands must have been consumed already.
    #[allow(dead_code)]
    pub async fn send_quiet(&mut self, line: &str) -> anyhow::Result<()> {
        self.send(line).await?;
        self.expect_silence().await
    }
}
