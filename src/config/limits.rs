//! Queue capacity configuration.

use serde::Deserialize;

/// Queue capacities between connection tasks and the hub.
///
/// `send_queue` is a backlog in lines. A client at that backlog stops
/// being read, and is disconnected as a slow consumer when another
/// client's traffic arrives for it. Replies to its own commands are
/// always queued.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Outbound backlog per connection, in lines (default: 256).
    #[serde(default = "default_send_queue")]
    pub send_queue: usize,
    /// Connection events buffered for the hub (default: 1024).
    #[serde(default = "default_event_queue")]
    pub event_queue: usize,
    /// Maximum events the hub takes per wake-up (default: 64).
    #[serde(default = "default_event_batch")]
    pub event_batch: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            send_queue: default_send_queue(),
            event_queue: default_event_queue(),
            event_batch: default_event_batch(),
        }
    }
}

fn default_send_queue() -> usize {
    256
}

fn default_event_queue() -> usize {
    1024
}

fn default_event_batch() -> usize {
    64
}
