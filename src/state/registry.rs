//! The registry of users and channels.
//!
//! Users are keyed by their [`ConnectionId`] with a nickname index beside
//! them. Channels are kept in creation order with a name index; they are
//! created by the first `JOIN` and never deleted, so an empty channel stays
//! listable.
//!
//! Channel membership stores connection ids only. A nickname is resolved
//! through the registry whenever a notice needs it.

use super::{Channel, ConnectionId, User};
use std::collections::HashMap;
use thiserror::Error;

/// Registration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("connection is already registered")]
    AlreadyRegistered,
    #[error("nickname is already in use")]
    NameTaken,
}

/// Membership failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("connection is not registered")]
    NotRegistered,
    #[error("no such channel")]
    NoSuchChannel,
    #[error("already a member")]
    AlreadyMember,
    #[error("not a member")]
    NotMember,
}

/// A user leaving one channel, and who is still in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub channel: String,
    /// Remaining members in membership order.
    pub remaining: Vec<ConnectionId>,
}

/// Users and channels.
#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<ConnectionId, User>,
    nicks: HashMap<String, ConnectionId>,
    channels: Vec<Channel>,
    channel_index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Bind a nickname to a connection.
    ///
    /// Nicknames compare byte-for-byte, so `alice` and `Alice` are distinct.
    pub fn register(&mut self, conn: ConnectionId, nick: &str) -> Result<&User, RegistryError> {
        if self.users.contains_key(&conn) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if self.nicks.contains_key(nick) {
            return Err(RegistryError::NameTaken);
        }

        self.nicks.insert(nick.to_owned(), conn);
        Ok(self.users.entry(conn).or_insert(User::new(conn, nick)))
    }

    pub fn user(&self, conn: ConnectionId) -> Option<&User> {
        self.users.get(&conn)
    }

    #[cfg(test)]
    pub fn user_by_nick(&self, nick: &str) -> Option<&User> {
        self.resolve_nick(nick).and_then(|conn| self.users.get(&conn))
    }

    pub fn resolve_nick(&self, nick: &str) -> Option<ConnectionId> {
        self.nicks.get(nick).copied()
    }

    pub fn is_registered(&self, conn: ConnectionId) -> bool {
        self.users.contains_key(&conn)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Set the operator flag. Returns `true` only when it was newly set.
    pub fn grant_operator(&mut self, conn: ConnectionId) -> bool {
        match self.users.get_mut(&conn) {
            Some(user) if !user.is_operator => {
                user.is_operator = true;
                true
            }
            _ => false,
        }
    }

    /// Remove a user from every channel and then from the registry.
    ///
    /// Returns the removed user and one [`Departure`] per channel it was
    /// in, in channel creation order. `None` if the connection never
    /// registered.
    pub fn remove_user(&mut self, conn: ConnectionId) -> Option<(User, Vec<Departure>)> {
        let user = self.users.remove(&conn)?;
        self.nicks.remove(&user.nick);
        let departures = self.part_all(conn);
        Some((user, departures))
    }

    // ------------------------------------------------------------------
    // Channels
    // ------------------------------------------------------------------

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channel_index.get(name).map(|&index| &self.channels[index])
    }

    /// All channels in creation order.
    pub fn channels(&self) -> impl ExactSizeIterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Add a registered user to a channel, creating the channel on first use.
    ///
    /// Returns `true` if the channel was created.
    pub fn join(&mut self, name: &str, conn: ConnectionId) -> Result<bool, MembershipError> {
        if !self.users.contains_key(&conn) {
            return Err(MembershipError::NotRegistered);
        }

        let (index, created) = match self.channel_index.get(name) {
            Some(&index) => (index, false),
            None => {
                let index = self.channels.len();
                self.channels.push(Channel::new(name));
                self.channel_index.insert(name.to_owned(), index);
                (index, true)
            }
        };

        if !self.channels[index].add_member(conn) {
            return Err(MembershipError::AlreadyMember);
        }
        Ok(created)
    }

    /// Remove a member from one channel. Returns the remaining members.
    pub fn part(
        &mut self,
        name: &str,
        conn: ConnectionId,
    ) -> Result<Vec<ConnectionId>, MembershipError> {
        let channel = self
            .channel_index
            .get(name)
            .map(|&index| &mut self.channels[index])
            .ok_or(MembershipError::NoSuchChannel)?;

        if !channel.remove_member(conn) {
            return Err(MembershipError::NotMember);
        }
        Ok(channel.members().to_vec())
    }

    /// Remove a member from every channel it belongs to.
    pub fn part_all(&mut self, conn: ConnectionId) -> Vec<Departure> {
        self.channels
            .iter_mut()
            .filter_map(|channel| {
                channel.remove_member(conn).then(|| Departure {
                    channel: channel.name().to_owned(),
                    remaining: channel.members().to_vec(),
                })
            })
            .collect()
    }

    /// Remove `target` from a channel on an operator's behalf.
    pub fn kick(
        &mut self,
        name: &str,
        target: ConnectionId,
    ) -> Result<Vec<ConnectionId>, MembershipError> {
        self.part(name, target)
    }
}
