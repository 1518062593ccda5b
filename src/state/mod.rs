//! Server state.
//!
//! Everything here is owned by the hub task and mutated from it alone.

mod channel;
mod registry;
mod uid;
mod user;

pub use channel::Channel;
pub use registry::{Departure, MembershipError, Registry, RegistryError};
pub use uid::{ConnectionId, ConnectionIdGenerator};
pub use user::User;
