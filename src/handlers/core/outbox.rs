//! Outbound delivery.
//!
//! Every open connection has a queue drained by its connection task. The
//! outbox pushes onto those queues without waiting, so one slow reader
//! never stalls the hub. Each queue carries a backlog counter shared with
//! the connection task, which stops reading input while its own backlog is
//! at the limit.
//!
//! # SendQ Overflow Protection
//!
//! Replies to the command being handled are always queued. A line caused
//! by someone else's command is a write failure when the recipient's
//! backlog is already at the limit, and so is a closed queue. The line is
//! dropped and the recipient is recorded; the hub disconnects it through
//! the normal cleanup path once the current command is done.

use crate::state::ConnectionId;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Create the two ends of one connection's outbound queue.
pub fn send_queue() -> (SendQueue, SendQueueReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let backlog = Arc::new(AtomicUsize::new(0));
    (
        SendQueue {
            tx,
            backlog: Arc::clone(&backlog),
        },
        SendQueueReceiver { rx, backlog },
    )
}

/// Sending end of a connection's outbound queue, held by the outbox.
#[derive(Debug)]
pub struct SendQueue {
    tx: mpsc::UnboundedSender<String>,
    backlog: Arc<AtomicUsize>,
}

impl SendQueue {
    /// Lines queued but not yet taken by the connection task.
    pub fn backlog(&self) -> usize {
        self.backlog.load(Ordering::Relaxed)
    }

    /// Returns false if the connection task is gone.
    fn push(&self, line: String) -> bool {
        self.backlog.fetch_add(1, Ordering::Relaxed);
        if self.tx.send(line).is_err() {
            self.backlog.fetch_sub(1, Ordering::Relaxed);
            return false;
        }
        true
    }
}

/// Receiving end of a connection's outbound queue.
#[derive(Debug)]
pub struct SendQueueReceiver {
    rx: mpsc::UnboundedReceiver<String>,
    backlog: Arc<AtomicUsize>,
}

impl SendQueueReceiver {
    /// Next queued line; `None` once the hub dropped the queue and it is empty.
    pub async fn recv(&mut self) -> Option<String> {
        let line = self.rx.recv().await?;
        self.backlog.fetch_sub(1, Ordering::Relaxed);
        Some(line)
    }

    /// Next queued line if one is ready.
    pub fn try_recv(&mut self) -> Option<String> {
        let line = self.rx.try_recv().ok()?;
        self.backlog.fetch_sub(1, Ordering::Relaxed);
        Some(line)
    }

    pub fn backlog(&self) -> usize {
        self.backlog.load(Ordering::Relaxed)
    }

    /// True once the hub has dropped the sending end.
    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.rx.is_closed()
    }
}

/// Outbound queues of all open connections.
#[derive(Debug)]
pub struct Outbox {
    queues: HashMap<ConnectionId, SendQueue>,
    failed: VecDeque<ConnectionId>,
    /// Backlog at which a line from another client's command fails.
    limit: usize,
    /// The connection whose command is being handled.
    caller: Option<ConnectionId>,
}

impl Outbox {
    pub fn new(limit: usize) -> Self {
        Self {
            queues: HashMap::new(),
            failed: VecDeque::new(),
            limit,
            caller: None,
        }
    }

    /// Start delivering to a new connection.
    pub fn open(&mut self, conn: ConnectionId, queue: SendQueue) {
        self.queues.insert(conn, queue);
    }

    /// Stop delivering to a connection.
    ///
    /// Dropping the sender is the close signal: the connection task writes
    /// what is still queued, then shuts the socket.
    pub fn close(&mut self, conn: ConnectionId) -> bool {
        self.queues.remove(&conn).is_some()
    }

    pub fn is_open(&self, conn: ConnectionId) -> bool {
        self.queues.contains_key(&conn)
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Mark whose command the following lines answer.
    pub fn begin(&mut self, caller: ConnectionId) {
        self.caller = Some(caller);
    }

    /// Queue one line for one connection. Unknown connections are ignored.
    pub fn send(&mut self, conn: ConnectionId, line: impl Into<String>) {
        let Some(queue) = self.queues.get(&conn) else {
            return;
        };

        if self.caller != Some(conn) && queue.backlog() >= self.limit {
            warn!(%conn, backlog = queue.backlog(), "SendQ exceeded: client not reading");
            self.mark_failed(conn);
            return;
        }

        if !queue.push(line.into()) {
            debug!(%conn, "Send queue closed");
            self.mark_failed(conn);
        }
    }

    /// Queue the same line for each recipient, in order.
    pub fn broadcast<'r>(
        &mut self,
        recipients: impl IntoIterator<Item = &'r ConnectionId>,
        line: &str,
    ) {
        for &conn in recipients {
            self.send(conn, line);
        }
    }

    /// Take the next connection whose delivery failed and that is still open.
    pub fn take_failed(&mut self) -> Option<ConnectionId> {
        while let Some(conn) = self.failed.pop_front() {
            if self.is_open(conn) {
                return Some(conn);
            }
        }
        None
    }

    fn mark_failed(&mut self, conn: ConnectionId) {
        if !self.failed.contains(&conn) {
            self.failed.push_back(conn);
        }
    }
}
