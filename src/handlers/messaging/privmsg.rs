//! PRIVMSG command handler.
//!
//! The target resolves to a nickname first and to a channel only if no
//! user has that name. Channel messages go to every member, the sender
//! included, and the sender need not be a member.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::ConnectionId;
use chatd_proto::{Privmsg, reply};
use tracing::debug;

enum Target {
    User(ConnectionId),
    Channel,
}

pub fn handle(ctx: &mut Context<'_>, msg: Privmsg<'_>) -> HandlerResult {
    let target = if let Some(conn) = ctx.registry.resolve_nick(msg.target) {
        Target::User(conn)
    } else if ctx.registry.channel(msg.target).is_some() {
        Target::Channel
    } else {
        return Err(HandlerError::NoSuchTarget);
    };

    if msg.text.is_empty() {
        return Err(HandlerError::NoTextToSend);
    }

    let sender = ctx.nick()?;
    match target {
        Target::User(conn) if conn == ctx.conn => Err(HandlerError::SelfMessage),
        Target::User(conn) => {
            ctx.outbox.send(conn, reply::direct_message(&sender, msg.text));
            debug!(from = %sender, to = msg.target, "Direct message");
            Ok(())
        }
        Target::Channel => {
            if let Some(channel) = ctx.registry.channel(msg.target) {
                let line = reply::channel_message(msg.target, &sender, msg.text);
                ctx.outbox.broadcast(channel.members(), &line);
                debug!(
                    from = %sender,
                    channel = msg.target,
                    recipients = channel.len(),
                    "Channel message"
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::TestHub;

    #[test]
    fn direct_message_reaches_only_target() {
        let mut hub = TestHub::new();
        let mut alice = hub.register("alice");
        let mut bob = hub.register("bob");
        let mut carol = hub.register("carol");

        hub.send(&alice, "PRIVMSG bob hello there  bob");
        assert_eq!(bob.drain(), ["alice: hello there  bob\n"]);
        assert!(alice.drain().is_empty());
        assert!(carol.drain().is_empty());
    }

    #[test]
    fn channel_message_includes_sender() {
        let mut hub = TestHub::new();
        let mut alice = hub.register("alice");
        let mut bob = hub.register("bob");

        hub.send(&alice, "JOIN #rust");
        hub.send(&bob, "JOIN #rust");
        alice.drain();
        bob.drain();

        hub.send(&alice, "PRIVMSG #rust hi all");
        assert_eq!(alice.drain(), ["#rust> alice: hi all\n"]);
        assert_eq!(bob.drain(), ["#rust> alice: hi all\n"]);
    }

    #[test]
    fn non_member_can_message_channel() {
        let mut hub = TestHub::new();
        let mut alice = hub.register("alice");
        let mut bob = hub.register("bob");

        hub.send(&bob, "JOIN #rust");
        bob.drain();

        hub.send(&alice, "PRIVMSG #rust knock knock");
        assert!(alice.drain().is_empty());
        assert_eq!(bob.drain(), ["#rust> alice: knock knock\n"]);
    }

    #[test]
    fn message_to_self_is_rejected() {
        let mut hub = TestHub::new();
        let mut alice = hub.register("alice");

        hub.send(&alice, "PRIVMSG alice hi");
        assert_eq!(alice.drain(), ["You cannot send a message to yourself.\n"]);
    }

    #[test]
    fn unknown_target_reported_before_empty_text() {
        let mut hub = TestHub::new();
        let mut alice = hub.register("alice");
        let _bob = hub.register("bob");

        hub.send(&alice, "PRIVMSG nobody hi");
        hub.send(&alice, "PRIVMSG bob ");
        hub.send(&alice, "PRIVMSG ab");
        assert_eq!(
            alice.drain(),
            [
                "There is no user or channel with the name you have provided.\n",
                "Messages must be at least 1 character in length.\n",
                "Invalid PRIVMSG command.\n",
            ]
        );
    }
}
