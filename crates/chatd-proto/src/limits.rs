//! Protocol limits.
//!
//! These are part of the wire contract, not buffer sizes: a client can rely
//! on a 20 character nickname being accepted and a 21 character one being
//! rejected.

/// Longest nickname, channel name (including the leading `#`) or password.
pub const MAX_NAME_LEN: usize = 20;

/// Longest PRIVMSG body a client is promised to get through.
pub const MAX_MESSAGE_LEN: usize = 512;

/// Largest input line accepted from a client, terminator included.
pub const READ_CHUNK: usize = 1024;

/// Shortest command a registered client can send (`LIST`, `PART`, `QUIT`).
pub const MIN_COMMAND_LEN: usize = 4;

/// Longest command a registered client can send:
/// `PRIVMSG <20 char name> <512 char message>`.
pub const MAX_COMMAND_LEN: usize = "PRIVMSG".len() + 1 + MAX_NAME_LEN + 1 + MAX_MESSAGE_LEN;

/// Shortest `USER <nick>` line.
pub const MIN_REGISTRATION_LEN: usize = "USER ".len() + 1;

/// Longest `USER <nick>` line.
pub const MAX_REGISTRATION_LEN: usize = "USER ".len() + MAX_NAME_LEN;

/// Bounds on the text following `KICK `: `<chan> <nick>`.
pub const KICK_ARGS_LEN: std::ops::RangeInclusive<usize> = 3..=(MAX_NAME_LEN * 2 + 1);

/// Bounds on the text following `PRIVMSG `: `<target> <message>`.
pub const PRIVMSG_ARGS_LEN: std::ops::RangeInclusive<usize> =
    3..=(MAX_NAME_LEN + 1 + MAX_MESSAGE_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_bounds() {
        assert_eq!(MAX_COMMAND_LEN, 541);
        assert_eq!(MIN_REGISTRATION_LEN, 6);
        assert_eq!(MAX_REGISTRATION_LEN, 25);
        assert_eq!(*KICK_ARGS_LEN.end(), 41);
        assert_eq!(*PRIVMSG_ARGS_LEN.end(), 533);
    }
}
