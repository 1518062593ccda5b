//! Command classification and validation.
//!
//! Input is one line with its terminator already stripped. Registration
//! lines go through [`parse_registration`]; everything a registered client
//! sends goes through [`Command::parse`].
//!
//! Some checks cannot run here because their precedence depends on server
//! state: `OPERATOR` and `KICK` report their argument errors only after the
//! caller's privileges have been checked, so those variants carry the
//! validation outcome instead of failing the parse.

use crate::error::{ProtocolError, Result};
use crate::limits::{
    KICK_ARGS_LEN, MAX_COMMAND_LEN, MAX_NAME_LEN, MAX_REGISTRATION_LEN, MIN_COMMAND_LEN,
    MIN_REGISTRATION_LEN, PRIVMSG_ARGS_LEN,
};
use crate::name::NameExt;

/// A validated command from a registered client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `LIST` or `LIST <channel>`. The channel is looked up verbatim.
    List(Option<&'a str>),
    /// `JOIN <channel>` with a grammatical channel name.
    Join(&'a str),
    /// `PART` or `PART <channel>`.
    Part(Option<&'a str>),
    /// `OPERATOR <password>`, length check deferred.
    Operator(Result<&'a str>),
    /// `KICK <channel> <nick>`, length check deferred.
    Kick(Result<KickArgs<'a>>),
    /// `PRIVMSG <target> <message>`.
    Privmsg(Privmsg<'a>),
    /// Bare `QUIT`.
    Quit,
}

/// Arguments of `KICK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickArgs<'a> {
    /// Channel to kick from.
    pub channel: &'a str,
    /// Nickname of the user to remove.
    pub nick: &'a str,
}

/// Arguments of `PRIVMSG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Privmsg<'a> {
    /// A nickname or a channel name; nicknames win.
    pub target: &'a str,
    /// Message body, possibly empty.
    pub text: &'a str,
}

impl<'a> Command<'a> {
    /// Classify one line from a registered client.
    ///
    /// The verb is everything up to the first space and is case-sensitive.
    pub fn parse(line: &'a str) -> Result<Self> {
        if !(MIN_COMMAND_LEN..=MAX_COMMAND_LEN).contains(&line.len()) {
            return Err(ProtocolError::InvalidCommand);
        }

        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (line, None),
        };

        match verb {
            "USER" => Err(ProtocolError::AlreadyRegistered),
            "LIST" => Ok(Self::List(channel_lookup_arg(arg)?)),
            "JOIN" => parse_join(arg),
            "PART" => Ok(Self::Part(channel_lookup_arg(arg)?)),
            "OPERATOR" => Ok(Self::Operator(parse_password(arg))),
            "KICK" => Ok(Self::Kick(parse_kick(arg))),
            "PRIVMSG" => parse_privmsg(arg),
            "QUIT" => match arg {
                None => Ok(Self::Quit),
                Some(_) => Err(ProtocolError::MalformedQuit),
            },
            _ => Err(ProtocolError::InvalidCommand),
        }
    }

    /// The command verb, for log fields.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::List(_) => "LIST",
            Self::Join(_) => "JOIN",
            Self::Part(_) => "PART",
            Self::Operator(_) => "OPERATOR",
            Self::Kick(_) => "KICK",
            Self::Privmsg(_) => "PRIVMSG",
            Self::Quit => "QUIT",
        }
    }
}

/// Validate the registration line `USER <nick>` and return the nickname.
///
/// Every error returned here is fatal to the connection.
pub fn parse_registration(line: &str) -> Result<&str> {
    if !(MIN_REGISTRATION_LEN..=MAX_REGISTRATION_LEN).contains(&line.len()) {
        return Err(ProtocolError::NotIdentified);
    }

    let nick = line
        .strip_prefix("USER ")
        .ok_or(ProtocolError::NotIdentified)?;

    if !nick.is_valid_nickname() {
        return Err(ProtocolError::InvalidNickname);
    }

    Ok(nick)
}

/// Optional channel argument of `LIST` and `PART`. Only the length is checked.
fn channel_lookup_arg(arg: Option<&str>) -> Result<Option<&str>> {
    match arg {
        Some(name) if name.len() > MAX_NAME_LEN => Err(ProtocolError::ChannelNameLength),
        other => Ok(other),
    }
}

fn parse_join(arg: Option<&str>) -> Result<Command<'_>> {
    let name = arg.unwrap_or_default();

    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(ProtocolError::ChannelNameLength);
    }
    if !name.is_valid_channel_name() {
        return Err(ProtocolError::ChannelNameGrammar);
    }

    Ok(Command::Join(name))
}

fn parse_password(arg: Option<&str>) -> Result<&str> {
    match arg {
        Some(password) if (1..=MAX_NAME_LEN).contains(&password.len()) => Ok(password),
        _ => Err(ProtocolError::PasswordLength),
    }
}

fn parse_kick(arg: Option<&str>) -> Result<KickArgs<'_>> {
    let rest = arg.unwrap_or_default();

    if !KICK_ARGS_LEN.contains(&rest.len()) {
        return Err(ProtocolError::InvalidKick);
    }

    let (channel, nick) = split_first_word(rest);
    Ok(KickArgs { channel, nick })
}

fn parse_privmsg(arg: Option<&str>) -> Result<Command<'_>> {
    let rest = arg.unwrap_or_default();

    if !PRIVMSG_ARGS_LEN.contains(&rest.len()) {
        return Err(ProtocolError::InvalidPrivmsg);
    }

    let (target, text) = split_first_word(rest);
    Ok(Command::Privmsg(Privmsg { target, text }))
}

/// Split at the first space. The remainder keeps any further spaces.
fn split_first_word(s: &str) -> (&str, &str) {
    s.split_once(' ').unwrap_or((s, ""))
}
