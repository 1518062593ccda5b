//! Name grammar.
//!
//! Nicknames and operator passwords match `[A-Za-z][A-Za-z0-9_]*`, channel
//! names match `#[A-Za-z][A-Za-z0-9_]*`. All three are 1 to
//! [`MAX_NAME_LEN`](crate::limits::MAX_NAME_LEN) characters long, the `#`
//! counting towards a channel name's length.

use crate::limits::MAX_NAME_LEN;

/// Extension trait for checking names against the protocol grammar.
pub trait NameExt {
    /// Check if this string is a valid nickname.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatd_proto::NameExt;
    ///
    /// assert!("alice".is_valid_nickname());
    /// assert!("Bob_2".is_valid_nickname());
    ///
    /// assert!(!"2bob".is_valid_nickname());   // Can't start with digit
    /// assert!(!"_bob".is_valid_nickname());   // Can't start with underscore
    /// assert!(!"".is_valid_nickname());       // Empty
    /// assert!(!"bo b".is_valid_nickname());   // Contains space
    /// ```
    fn is_valid_nickname(&self) -> bool;

    /// Check if this string is a valid channel name.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatd_proto::NameExt;
    ///
    /// assert!("#general".is_valid_channel_name());
    /// assert!(!"general".is_valid_channel_name());
    /// assert!(!"#".is_valid_channel_name());
    /// assert!(!"#1st".is_valid_channel_name());
    /// ```
    fn is_valid_channel_name(&self) -> bool;

    /// Check if this string is acceptable as the server's operator password.
    fn is_valid_password(&self) -> bool;

    /// Check the grammar alone, ignoring length.
    fn matches_name_grammar(&self) -> bool;
}

impl NameExt for str {
    fn is_valid_nickname(&self) -> bool {
        self.len() <= MAX_NAME_LEN && self.matches_name_grammar()
    }

    fn is_valid_channel_name(&self) -> bool {
        self.len() <= MAX_NAME_LEN
            && self
                .strip_prefix('#')
                .is_some_and(|rest| rest.matches_name_grammar())
    }

    fn is_valid_password(&self) -> bool {
        self.is_valid_nickname()
    }

    fn matches_name_grammar(&self) -> bool {
        let mut chars = self.chars();

        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }

        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}
