//! Command handler context.

use super::Outbox;
use crate::config::OperatorConfig;
use crate::error::HandlerError;
use crate::state::{ConnectionId, Registry, User};

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The connection the command arrived on.
    pub conn: ConnectionId,
    pub registry: &'a mut Registry,
    pub outbox: &'a mut Outbox,
    pub operator: &'a OperatorConfig,
}

impl<'a> Context<'a> {
    pub fn new(
        conn: ConnectionId,
        registry: &'a mut Registry,
        outbox: &'a mut Outbox,
        operator: &'a OperatorConfig,
    ) -> Self {
        Self {
            conn,
            registry,
            outbox,
            operator,
        }
    }

    /// The caller's user record.
    pub fn user(&self) -> Result<&User, HandlerError> {
        self.registry
            .user(self.conn)
            .ok_or(HandlerError::NickMissing)
    }

    /// The caller's nickname, owned so the registry can be mutated afterwards.
    pub fn nick(&self) -> Result<String, HandlerError> {
        self.user().map(|user| user.nick.clone())
    }

    /// Queue a line for the caller.
    pub fn reply(&mut self, line: impl Into<String>) {
        self.outbox.send(self.conn, line);
    }
}
