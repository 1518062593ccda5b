//! Reply and notice builders.
//!
//! Every function returns a complete line, trailing newline included, ready
//! to be queued on a connection.

/// Sent to a user whose `OPERATOR` password was accepted.
pub const OPERATOR_GRANTED: &str = "Operator status bestowed.\n";

/// Sent after a successful `USER`.
pub fn welcome(nick: &str) -> String {
    format!("Welcome, {nick}.\n")
}

/// Header of a bare `LIST`.
pub fn channel_count(count: usize) -> String {
    format!("There are currently {count} channel(s):\n")
}

/// Header of `LIST <channel>`.
pub fn member_count(count: usize, channel: &str) -> String {
    format!("There are currently {count} member(s) in {channel}:\n")
}

/// One channel or member in a listing.
pub fn list_entry(name: &str) -> String {
    format!("* {name}\n")
}

/// Confirmation sent to the joining user.
pub fn joined(channel: &str) -> String {
    format!("Joined channel {channel}\n")
}

/// Sent to the members already in a channel when someone joins.
pub fn join_notice(channel: &str, nick: &str) -> String {
    format!("{channel}> {nick} has joined the channel.\n")
}

/// Sent to the remaining members when someone parts or disconnects.
pub fn part_notice(channel: &str, nick: &str) -> String {
    format!("{channel}> {nick} has left the channel.\n")
}

/// Sent to the user removed by `KICK`.
pub fn kicked(channel: &str) -> String {
    format!("You have been kicked from channel {channel}.\n")
}

/// Sent to the remaining members after a `KICK`.
pub fn kick_notice(channel: &str, nick: &str) -> String {
    format!("{channel}> {nick} has been kicked from the channel.\n")
}

/// `PRIVMSG` to a single user.
pub fn direct_message(sender: &str, text: &str) -> String {
    format!("{sender}: {text}\n")
}

/// `PRIVMSG` to a channel.
pub fn channel_message(channel: &str, sender: &str, text: &str) -> String {
    format!("{channel}> {sender}: {text}\n")
}
