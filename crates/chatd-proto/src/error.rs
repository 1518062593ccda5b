//! Error types for the chat protocol.
//!
//! The `Display` text of every [`ProtocolError`] is the exact reply sent to
//! the client, without the trailing newline.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// A line that failed validation before reaching the server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// An unregistered connection sent something other than `USER <nick>`.
    #[error("Invalid command, please identify yourself with USER.")]
    NotIdentified,

    /// `USER` with a nickname outside the grammar.
    #[error("Invalid nickname, try again.")]
    InvalidNickname,

    /// Unknown verb, or a line outside the overall length bounds.
    #[error("Invalid command.")]
    InvalidCommand,

    /// `USER` from a connection that already has a nickname.
    #[error("You cannot change your username.")]
    AlreadyRegistered,

    /// Channel argument of `LIST`, `JOIN` or `PART` is empty or too long.
    #[error("Channel name must have length 1-20.")]
    ChannelNameLength,

    /// `JOIN` with a name outside the channel grammar.
    #[error("Channel name does not match expected regular expression: #[a-zA-Z][_0-9a-zA-Z]*")]
    ChannelNameGrammar,

    /// `OPERATOR` password argument is empty or too long.
    #[error("Password must be 1-20 characters.")]
    PasswordLength,

    /// `KICK` arguments are too short or too long.
    #[error("Invalid KICK command: channel and user names must be 1-20 characters in length.")]
    InvalidKick,

    /// `PRIVMSG` arguments are too short or too long.
    #[error("Invalid PRIVMSG command.")]
    InvalidPrivmsg,

    /// `QUIT` followed by anything.
    #[error("Malformed QUIT command - Usage: QUIT")]
    MalformedQuit,
}

impl ProtocolError {
    /// Whether the connection must be closed after the reply is sent.
    ///
    /// Only failures of the registration line are fatal.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotIdentified | Self::InvalidNickname)
    }

    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotIdentified | Self::InvalidCommand => "invalid_command",
            Self::InvalidNickname | Self::ChannelNameGrammar => "bad_grammar",
            Self::ChannelNameLength | Self::PasswordLength => "bad_length",
            Self::AlreadyRegistered => "already_registered",
            Self::InvalidKick | Self::InvalidPrivmsg | Self::MalformedQuit => "malformed",
        }
    }

    /// The reply line sent to the client, newline included.
    pub fn to_reply(&self) -> String {
        format!("{self}\n")
    }
}
