//! Core handler infrastructure.
//!
//! - [`Context`]: what a handler sees: the caller, the registry, the outbox
//! - [`Outbox`]: non-blocking delivery onto per-connection queues
//! - [`dispatch`]: routes a decoded frame to the handler for its command

pub mod context;
pub mod dispatch;
pub mod outbox;

pub use context::Context;
pub use dispatch::dispatch_frame;
pub use outbox::{Outbox, SendQueue, SendQueueReceiver, send_queue};
