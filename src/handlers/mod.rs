//! Command handlers.
//!
//! Handlers are plain functions over a [`Context`]: they read and mutate
//! the registry and queue replies on the outbox. Failures come back as a
//! [`HandlerError`](crate::error::HandlerError) whose text is the reply.
//!
//! - [`connection`]: `USER`, `QUIT` and disconnect cleanup
//! - [`channel`]: `LIST`, `JOIN`, `PART`, `KICK`
//! - [`messaging`]: `PRIVMSG`
//! - [`oper`]: `OPERATOR`

pub mod channel;
pub mod connection;
pub mod core;
pub mod messaging;
pub mod oper;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::connection::disconnect;
pub use self::core::{
    Context, Outbox, SendQueue, SendQueueReceiver, dispatch_frame, send_queue,
};
