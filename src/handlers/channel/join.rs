//! JOIN command handler.
//!
//! Existing members hear about the joiner before the joiner is added, so
//! the joiner never receives its own notice. The joiner gets a
//! confirmation instead.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::MembershipError;
use chatd_proto::reply;
use tracing::info;

pub fn handle(ctx: &mut Context<'_>, name: &str) -> HandlerResult {
    let conn = ctx.conn;
    let nick = ctx.nick()?;

    if let Some(channel) = ctx.registry.channel(name) {
        if channel.is_member(conn) {
            return Err(HandlerError::AlreadyMember);
        }
        ctx.outbox
            .broadcast(channel.members(), &reply::join_notice(name, &nick));
    }

    let created = ctx.registry.join(name, conn).map_err(|e| match e {
        MembershipError::AlreadyMember => HandlerError::AlreadyMember,
        _ => HandlerError::NickMissing,
    })?;

    info!(%conn, %nick, channel = name, created, "Joined channel");
    ctx.reply(reply::joined(name));
    Ok(())
}
