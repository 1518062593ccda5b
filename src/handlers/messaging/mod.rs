//! Message delivery handlers.

pub mod privmsg;
