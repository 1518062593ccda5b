//! USER handler: binds a nickname to the connection.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::RegistryError;
use chatd_proto::{ProtocolError, reply};
use tracing::info;

pub fn handle(ctx: &mut Context<'_>, nick: &str) -> HandlerResult {
    ctx.registry.register(ctx.conn, nick).map_err(|e| match e {
        RegistryError::NameTaken => HandlerError::NameTaken,
        RegistryError::AlreadyRegistered => ProtocolError::AlreadyRegistered.into(),
    })?;

    info!(conn = %ctx.conn, nick, "User registered");
    ctx.reply(reply::welcome(nick));
    Ok(())
}
