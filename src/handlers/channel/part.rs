//! PART command handler.
//!
//! Bare `PART` leaves every channel the caller is in. Channels stay around
//! after their last member leaves.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::MembershipError;
use chatd_proto::reply;
use tracing::info;

pub fn handle(ctx: &mut Context<'_>, name: &str) -> HandlerResult {
    let conn = ctx.conn;
    let nick = ctx.nick()?;

    let remaining = ctx.registry.part(name, conn).map_err(|e| match e {
        MembershipError::NoSuchChannel => HandlerError::NoSuchChannel,
        _ => HandlerError::NotMember,
    })?;

    ctx.outbox
        .broadcast(&remaining, &reply::part_notice(name, &nick));
    info!(%conn, %nick, channel = name, "Left channel");
    Ok(())
}

pub fn part_all(ctx: &mut Context<'_>) -> HandlerResult {
    let conn = ctx.conn;
    let nick = ctx.nick()?;

    for departure in ctx.registry.part_all(conn) {
        ctx.outbox.broadcast(
            &departure.remaining,
            &reply::part_notice(&departure.channel, &nick),
        );
        info!(%conn, %nick, channel = %departure.channel, "Left channel");
    }

    Ok(())
}
