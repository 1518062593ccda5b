//! # chatd-proto
//!
//! The line protocol spoken by `chatd`: newline-terminated ASCII commands,
//! case-sensitive verbs, and fixed reply texts.
//!
//! This crate knows nothing about sockets or server state. It provides:
//!
//! - Protocol limits ([`limits`])
//! - Nickname, channel name and password grammars ([`name`])
//! - Command classification and validation ([`command`])
//! - Reply and notice builders ([`reply`])
//! - A tokio line codec ([`line`], behind the `tokio` feature)
//!
//! ## Parsing
//!
//! ```rust
//! use chatd_proto::{Command, ProtocolError};
//!
//! assert_eq!(Command::parse("JOIN #rust"), Ok(Command::Join("#rust")));
//! assert_eq!(Command::parse("JOIN rust"), Err(ProtocolError::ChannelNameGrammar));
//! assert_eq!(chatd_proto::parse_registration("USER alice"), Ok("alice"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod limits;
#[cfg(feature = "tokio")]
pub mod line;
pub mod name;
pub mod reply;

pub use command::{parse_registration, Command, KickArgs, Privmsg};
pub use error::ProtocolError;
#[cfg(feature = "tokio")]
pub use line::{Frame, LineCodec};
pub use name::NameExt;
