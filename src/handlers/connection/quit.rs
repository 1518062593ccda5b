//! QUIT handler and disconnect cleanup.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use chatd_proto::reply;
use tracing::info;

/// `QUIT` is signalled as an error so the hub runs its normal close path.
pub fn handle(ctx: &mut Context<'_>) -> HandlerResult {
    info!(conn = %ctx.conn, "Client quit");
    Err(HandlerError::Quit)
}

/// Remove the caller everywhere and tell each affected channel.
///
/// Shared by `QUIT`, fatal errors, transport close and slow-consumer
/// eviction. A connection that never registered has nothing to clean up.
pub fn disconnect(ctx: &mut Context<'_>) {
    let Some((user, departures)) = ctx.registry.remove_user(ctx.conn) else {
        return;
    };

    for departure in &departures {
        ctx.outbox.broadcast(
            &departure.remaining,
            &reply::part_notice(&departure.channel, &user.nick),
        );
    }

    info!(
        conn = %ctx.conn,
        nick = %user.nick,
        channels = departures.len(),
        "User removed"
    );
}
