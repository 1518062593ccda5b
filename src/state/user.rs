//! Registered users.

use super::ConnectionId;

/// A registered participant, bound to exactly one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub conn: ConnectionId,
    pub nick: String,
    /// Granted by a successful `OPERATOR`; never revoked.
    pub is_operator: bool,
}

impl User {
    pub fn new(conn: ConnectionId, nick: impl Into<String>) -> Self {
        Self {
            conn,
            nick: nick.into(),
            is_operator: false,
        }
    }
}
