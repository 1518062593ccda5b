//! KICK command handler.
//!
//! Only operators may kick, and they need not be in the channel. The
//! privilege check comes before argument validation. A kicked user keeps
//! its session and may rejoin.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use chatd_proto::{KickArgs, ProtocolError, reply};
use tracing::info;

pub fn handle(ctx: &mut Context<'_>, args: Result<KickArgs<'_>, ProtocolError>) -> HandlerResult {
    let kicker = ctx.user()?;
    if !kicker.is_operator {
        return Err(HandlerError::NotOperator);
    }
    let kicker_nick = kicker.nick.clone();

    let KickArgs {
        channel: name,
        nick: target_nick,
    } = args?;

    let channel = ctx
        .registry
        .channel(name)
        .ok_or(HandlerError::KickNoSuchChannel)?;
    let target = ctx
        .registry
        .resolve_nick(target_nick)
        .ok_or(HandlerError::KickNoSuchUser)?;
    if !channel.is_member(target) {
        return Err(HandlerError::UserNotInChannel);
    }

    ctx.outbox.send(target, reply::kicked(name));
    let notice = reply::kick_notice(name, target_nick);
    ctx.outbox.broadcast(
        channel.members().iter().filter(|&&member| member != target),
        &notice,
    );

    ctx.registry
        .kick(name, target)
        .map_err(|_| HandlerError::UserNotInChannel)?;

    info!(
        conn = %ctx.conn,
        kicker = %kicker_nick,
        target = target_nick,
        channel = name,
        "User kicked"
    );
    Ok(())
}
