//! Command dispatch.
//!
//! Unregistered connections may only send `USER <nick>`; everything else
//! goes through [`Command::parse`] and on to the handler for its verb.

use super::Context;
use crate::error::HandlerResult;
use crate::handlers::{channel, connection, messaging, oper};
use chatd_proto::{Command, Frame, ProtocolError, parse_registration};
use tracing::{Level, debug, span};

/// Handle one decoded frame from `ctx.conn`.
pub fn dispatch_frame(ctx: &mut Context<'_>, frame: &Frame) -> HandlerResult {
    let registered = ctx.registry.is_registered(ctx.conn);

    match frame {
        Frame::Line(line) if registered => dispatch(ctx, line),
        Frame::Line(line) => dispatch_pre_reg(ctx, line),
        Frame::Overlong { len } => {
            debug!(conn = %ctx.conn, len, "Overlong line");
            if registered {
                Err(ProtocolError::InvalidCommand.into())
            } else {
                Err(ProtocolError::NotIdentified.into())
            }
        }
    }
}

/// The only command accepted before registration.
fn dispatch_pre_reg(ctx: &mut Context<'_>, line: &str) -> HandlerResult {
    let nick = parse_registration(line)?;
    connection::user::handle(ctx, nick)
}

fn dispatch(ctx: &mut Context<'_>, line: &str) -> HandlerResult {
    let command = Command::parse(line)?;

    let chat_span = span!(
        Level::DEBUG,
        "chat.command",
        command = command.verb(),
        conn = %ctx.conn,
    );
    let _enter = chat_span.enter();

    let result = match command {
        Command::List(None) => channel::list::list_channels(ctx),
        Command::List(Some(name)) => channel::list::list_members(ctx, name),
        Command::Join(name) => channel::join::handle(ctx, name),
        Command::Part(None) => channel::part::part_all(ctx),
        Command::Part(Some(name)) => channel::part::handle(ctx, name),
        Command::Operator(password) => oper::auth::handle(ctx, password),
        Command::Kick(args) => channel::kick::handle(ctx, args),
        Command::Privmsg(msg) => messaging::privmsg::handle(ctx, msg),
        Command::Quit => connection::quit::handle(ctx),
    };

    if let Err(ref e) = result {
        debug!(command = command.verb(), code = e.error_code(), error = %e, "Command error");
    }

    result
}
