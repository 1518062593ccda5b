//! Channel-related command handlers.
//!
//! Channel membership notices go out in membership order.

pub mod join;
pub mod kick;
pub mod list;
pub mod part;
