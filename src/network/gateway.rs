//! Gateway - TCP listener and the server's event loop.
//!
//! The Gateway binds the listening socket, spawns a Connection task for
//! each accepted client, and feeds connection events to the [`Hub`] in
//! batches. It is the only task that touches server state.

use super::{Connection, Hub, HubEvent};
use crate::config::{Config, LimitsConfig};
use crate::handlers::send_queue;
use crate::state::ConnectionIdGenerator;
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// The Gateway accepts incoming TCP connections and runs the hub.
pub struct Gateway {
    listener: TcpListener,
    hub: Hub,
    uid_gen: ConnectionIdGenerator,
    limits: LimitsConfig,
    events_tx: mpsc::Sender<HubEvent>,
    events_rx: mpsc::Receiver<HubEvent>,
}

impl Gateway {
    /// Bind the listener. Failure here is fatal to the process.
    pub async fn bind(config: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(config.listen.address).await?;
        info!(addr = %listener.local_addr()?, "Listener bound");

        let (events_tx, events_rx) = mpsc::channel(config.limits.event_queue);

        Ok(Self {
            listener,
            hub: Hub::new(config.operator.clone(), config.limits.send_queue),
            uid_gen: ConnectionIdGenerator::new(),
            limits: config.limits.clone(),
            events_tx,
            events_rx,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the gateway, accepting connections forever.
    ///
    /// Each wake-up either accepts one connection or takes a batch of
    /// pending events, so a connection is never served in the same
    /// wake-up that accepted it.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut batch = Vec::with_capacity(self.limits.event_batch);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, addr)) => self.accept(stream, addr),
                    Err(e) => error!(error = %e, "Failed to accept connection"),
                },
                received = self.events_rx.recv_many(&mut batch, self.limits.event_batch) => {
                    // The gateway holds a sender, so the channel never closes.
                    if received == 0 {
                        break;
                    }
                    debug!(events = received, "Processing event batch");
                    self.hub.handle_batch(&mut batch);
                }
            }
        }

        Ok(())
    }

    fn accept(&mut self, stream: TcpStream, addr: SocketAddr) {
        let conn = self.uid_gen.next();
        info!(%conn, %addr, "Connection accepted");

        let (queue_tx, queue_rx) = send_queue();
        self.hub.connect(conn, queue_tx);

        let connection = Connection::new(
            conn,
            stream,
            addr,
            self.events_tx.clone(),
            queue_rx,
            self.limits.send_queue,
        );
        tokio::spawn(async move {
            if let Err(e) = connection.run().await {
                debug!(%conn, %addr, error = %e, "Connection error");
            }
            info!(%conn, %addr, "Connection closed");
        });
    }
}
