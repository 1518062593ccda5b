//! Channels and their membership lists.

use super::ConnectionId;

/// A named group. Membership is kept in join order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    name: String,
    members: Vec<ConnectionId>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in the order they joined.
    pub fn members(&self) -> &[ConnectionId] {
        &self.members
    }

    pub fn is_member(&self, conn: ConnectionId) -> bool {
        self.members.contains(&conn)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member. Returns `false` if already present.
    pub(super) fn add_member(&mut self, conn: ConnectionId) -> bool {
        if self.is_member(conn) {
            return false;
        }
        self.members.push(conn);
        true
    }

    /// Remove a member, keeping the others in order. Returns `false` if absent.
    pub(super) fn remove_member(&mut self, conn: ConnectionId) -> bool {
        match self.members.iter().position(|&m| m == conn) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }
}
