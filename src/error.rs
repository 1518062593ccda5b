//! Unified error handling for chatd.
//!
//! Command handlers fail with a [`HandlerError`]. Its `Display` text is the
//! exact reply the client receives; [`HandlerError::closes_connection`]
//! tells the hub whether the connection survives it.

use chatd_proto::ProtocolError;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The line failed validation before touching any state.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Name already taken.")]
    NameTaken,

    /// `LIST <channel>` or `PART <channel>` for an unknown channel.
    #[error("There are no channels with the name you have given.")]
    NoSuchChannel,

    #[error("You are already a member of this channel.")]
    AlreadyMember,

    #[error("You are not a member of that channel.")]
    NotMember,

    #[error("This server has no password, no user can become an operator.")]
    NoOperatorPassword,

    #[error("You are already an operator.")]
    AlreadyOperator,

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("You are not an operator of this server.")]
    NotOperator,

    /// `KICK` naming an unknown channel.
    #[error("There is no channel with the name you have provided.")]
    KickNoSuchChannel,

    /// `KICK` naming an unknown user.
    #[error("There is no user with the name you have provided.")]
    KickNoSuchUser,

    #[error("The given user is not in the given channel.")]
    UserNotInChannel,

    /// `PRIVMSG` target is neither a nickname nor a channel.
    #[error("There is no user or channel with the name you have provided.")]
    NoSuchTarget,

    #[error("Messages must be at least 1 character in length.")]
    NoTextToSend,

    #[error("You cannot send a message to yourself.")]
    SelfMessage,

    /// The connection has no User although the command requires one.
    #[error("internal error: no user registered for this connection")]
    NickMissing,

    /// Client asked to leave.
    #[error("client quit")]
    Quit,
}

impl HandlerError {
    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Protocol(e) => e.error_code(),
            Self::NameTaken => "name_conflict",
            Self::NoSuchChannel
            | Self::KickNoSuchChannel
            | Self::KickNoSuchUser
            | Self::NoSuchTarget => "not_found",
            Self::NotMember | Self::UserNotInChannel => "not_member",
            Self::AlreadyMember | Self::AlreadyOperator => "already_in_state",
            Self::NoOperatorPassword | Self::NotOperator | Self::WrongPassword => "forbidden",
            Self::NoTextToSend => "no_text_to_send",
            Self::SelfMessage => "self_target",
            Self::NickMissing => "nick_missing",
            Self::Quit => "quit",
        }
    }

    /// Whether the hub must close the connection after handling this error.
    pub fn closes_connection(&self) -> bool {
        match self {
            Self::Protocol(e) => e.is_fatal(),
            Self::NameTaken | Self::Quit => true,
            _ => false,
        }
    }

    /// The reply line for the client, newline included.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply.
    pub fn to_reply(&self) -> Option<String> {
        match self {
            Self::Quit | Self::NickMissing => None,
            _ => Some(format!("{self}\n")),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
