//! OPERATOR command handler.
//!
//! Checks run in this order: the server has a password, the caller is not
//! already an operator, the password length, the password itself.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use chatd_proto::{ProtocolError, reply};
use tracing::{info, warn};

pub fn handle(ctx: &mut Context<'_>, password: Result<&str, ProtocolError>) -> HandlerResult {
    if ctx.operator.password.is_none() {
        return Err(HandlerError::NoOperatorPassword);
    }

    let user = ctx.user()?;
    if user.is_operator {
        return Err(HandlerError::AlreadyOperator);
    }
    let nick = user.nick.clone();

    let password = password?;
    if !ctx.operator.verify_password(password) {
        warn!(conn = %ctx.conn, %nick, "Failed OPERATOR attempt");
        return Err(HandlerError::WrongPassword);
    }

    ctx.registry.grant_operator(ctx.conn);
    info!(conn = %ctx.conn, %nick, "Operator status granted");
    ctx.reply(reply::OPERATOR_GRANTED);
    Ok(())
}
