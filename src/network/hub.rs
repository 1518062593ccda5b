//! The hub: single owner of the registry and of every outbound queue.
//!
//! Connection tasks never touch state. They forward decoded frames and
//! transport closes as [`HubEvent`]s, and the gateway hands them to the
//! hub in batches. Within a batch events run in ascending connection
//! order, and each event runs to completion, writes included, before the
//! next one starts.

use crate::config::OperatorConfig;
use crate::error::HandlerError;
use crate::handlers::{self, Context, Outbox, SendQueue};
use crate::state::{ConnectionId, Registry};
use chatd_proto::Frame;
use tracing::{debug, info, trace};

/// Something that happened on a connection.
#[derive(Debug)]
pub enum HubEvent {
    /// A complete line (or an overlong one) arrived.
    Frame { conn: ConnectionId, frame: Frame },
    /// The peer closed the socket or the transport failed.
    Disconnected { conn: ConnectionId },
}

impl HubEvent {
    pub fn conn(&self) -> ConnectionId {
        match self {
            Self::Frame { conn, .. } | Self::Disconnected { conn } => *conn,
        }
    }
}

/// Owner of all mutable server state.
pub struct Hub {
    registry: Registry,
    outbox: Outbox,
    operator: OperatorConfig,
}

impl Hub {
    /// `send_queue` is the backlog at which a client stops receiving
    /// other clients' traffic and is disconnected.
    pub fn new(operator: OperatorConfig, send_queue: usize) -> Self {
        Self {
            registry: Registry::new(),
            outbox: Outbox::new(send_queue),
            operator,
        }
    }

    /// Open a slot for a freshly accepted connection.
    pub fn connect(&mut self, conn: ConnectionId, queue: SendQueue) {
        self.outbox.open(conn, queue);
        debug!(%conn, open = self.outbox.len(), "Connection slot opened");
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Process everything one wake-up produced, lowest connection first.
    ///
    /// The sort is stable, so each connection's events keep their order.
    pub fn handle_batch(&mut self, batch: &mut Vec<HubEvent>) {
        batch.sort_by_key(HubEvent::conn);
        for event in batch.drain(..) {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: HubEvent) {
        let conn = event.conn();
        if !self.outbox.is_open(conn) {
            trace!(%conn, "Dropping event for closed connection");
            return;
        }

        self.outbox.begin(conn);
        match event {
            HubEvent::Frame { frame, .. } => self.handle_frame(conn, &frame),
            HubEvent::Disconnected { .. } => {
                info!(%conn, "Connection lost");
                self.close(conn);
            }
        }

        self.evict_failed();
    }

    fn handle_frame(&mut self, conn: ConnectionId, frame: &Frame) {
        let result = handlers::dispatch_frame(&mut self.context(conn), frame);

        if let Err(e) = result {
            self.handle_error(conn, e);
        }
    }

    fn handle_error(&mut self, conn: ConnectionId, error: HandlerError) {
        if let Some(reply) = error.to_reply() {
            self.outbox.send(conn, reply);
        }
        if error.closes_connection() {
            debug!(%conn, code = error.error_code(), "Closing connection after error");
            self.close(conn);
        }
    }

    /// Run disconnect cleanup and drop the connection's queue.
    fn close(&mut self, conn: ConnectionId) {
        handlers::disconnect(&mut self.context(conn));
        self.outbox.close(conn);
        debug!(
            %conn,
            open = self.outbox.len(),
            users = self.registry.user_count(),
            "Connection slot closed"
        );
    }

    /// Disconnect every recipient whose queue overflowed or closed.
    ///
    /// Cleanup notices can overflow further queues, so keep going until
    /// nothing is left.
    fn evict_failed(&mut self) {
        while let Some(conn) = self.outbox.take_failed() {
            info!(%conn, "Disconnecting client after write failure");
            self.close(conn);
        }
    }

    fn context(&mut self, conn: ConnectionId) -> Context<'_> {
        Context::new(
            conn,
            &mut self.registry,
            &mut self.outbox,
            &self.operator,
        )
    }
}
