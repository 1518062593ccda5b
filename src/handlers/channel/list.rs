//! LIST command handler.
//!
//! `LIST` reports every channel, empty ones included, in creation order.
//! `LIST <channel>` reports the members of one channel in join order.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use chatd_proto::reply;

pub fn list_channels(ctx: &mut Context<'_>) -> HandlerResult {
    let conn = ctx.conn;

    ctx.outbox
        .send(conn, reply::channel_count(ctx.registry.channel_count()));
    for channel in ctx.registry.channels() {
        ctx.outbox.send(conn, reply::list_entry(channel.name()));
    }

    Ok(())
}

pub fn list_members(ctx: &mut Context<'_>, name: &str) -> HandlerResult {
    let conn = ctx.conn;
    let channel = ctx
        .registry
        .channel(name)
        .ok_or(HandlerError::NoSuchChannel)?;

    ctx.outbox.send(conn, reply::member_count(channel.len(), name));
    for &member in channel.members() {
        if let Some(user) = ctx.registry.user(member) {
            ctx.outbox.send(conn, reply::list_entry(&user.nick));
        }
    }

    Ok(())
}
