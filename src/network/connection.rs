//! Connection - one task per client socket.
//!
//! A connection is only an I/O pump. Decoded frames go to the hub as
//! events; lines the hub queued go out to the socket. When the hub drops
//! the queue the connection writes what is left and closes. A peer close
//! or transport error is reported as [`HubEvent::Disconnected`].
//!
//! The outbound side is served even while a frame waits for room in the
//! event queue. Reading stops while the client's own backlog is at
//! `send_queue`, so a client that does not read is throttled by TCP
//! instead of growing its queue.

use super::HubEvent;
use crate::handlers::SendQueueReceiver;
use crate::state::ConnectionId;
use chatd_proto::LineCodec;
use futures_util::{SinkExt, StreamExt};
use std::io;
use std::net::SocketAddr;
use tokio::io::AsyncWrite;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, instrument, trace};

/// Why the pump stopped.
enum Closed {
    /// The hub dropped the outbound queue.
    ByServer,
    /// EOF from the peer.
    ByPeer,
}

/// A client connection handler.
pub struct Connection {
    conn: ConnectionId,
    stream: TcpStream,
    addr: SocketAddr,
    events: mpsc::Sender<HubEvent>,
    outgoing: SendQueueReceiver,
    send_queue: usize,
}

impl Connection {
    pub fn new(
        conn: ConnectionId,
        stream: TcpStream,
        addr: SocketAddr,
        events: mpsc::Sender<HubEvent>,
        outgoing: SendQueueReceiver,
        send_queue: usize,
    ) -> Self {
        Self {
            conn,
            stream,
            addr,
            events,
            outgoing,
            send_queue,
        }
    }

    /// Pump the socket until either side closes.
    #[instrument(skip(self), fields(conn = %self.conn, addr = %self.addr), name = "connection")]
    pub async fn run(self) -> io::Result<()> {
        let Self {
            conn,
            stream,
            events,
            mut outgoing,
            send_queue,
            ..
        } = self;

        let (read_half, write_half) = stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::new());
        let mut writer = FramedWrite::new(write_half, LineCodec::new());
        // A decoded frame waiting for room in the event queue.
        let mut inbound: Option<HubEvent> = None;

        let outcome = loop {
            let backlogged = outgoing.backlog() >= send_queue;
            if backlogged && inbound.is_none() {
                trace!(backlog = outgoing.backlog(), "Reading paused");
            }

            tokio::select! {
                permit = events.reserve(), if inbound.is_some() => match permit {
                    Ok(permit) => {
                        if let Some(event) = inbound.take() {
                            permit.send(event);
                        }
                    }
                    Err(_) => break Ok(Closed::ByServer),
                },
                frame = reader.next(), if inbound.is_none() && !backlogged => match frame {
                    Some(Ok(frame)) => inbound = Some(HubEvent::Frame { conn, frame }),
                    Some(Err(e)) => break Err(e),
                    None => break Ok(Closed::ByPeer),
                },
                line = outgoing.recv() => match line {
                    Some(line) => {
                        if let Err(e) = write_queued(&mut writer, &mut outgoing, line).await {
                            break Err(e);
                        }
                    }
                    None => break Ok(Closed::ByServer),
                },
            }
        };

        match outcome {
            Ok(Closed::ByServer) => {
                debug!("Closed by server");
                Ok(())
            }
            Ok(Closed::ByPeer) => {
                debug!("Peer closed connection");
                let _ = events.send(HubEvent::Disconnected { conn }).await;
                Ok(())
            }
            Err(e) => {
                let _ = events.send(HubEvent::Disconnected { conn }).await;
                Err(e)
            }
        }
    }
}

/// Write `first` and everything else already queued, then flush once.
async fn write_queued<W>(
    writer: &mut FramedWrite<W, LineCodec>,
    outgoing: &mut SendQueueReceiver,
    first: String,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.feed(first).await?;
    while let Some(line) = outgoing.try_recv() {
        writer.feed(line).await?;
    }
    writer.flush().await
}
