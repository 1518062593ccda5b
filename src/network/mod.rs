//! Network module.
//!
//! Contains the Gateway (TCP listener and event loop), the per-socket
//! Connection pump, and the Hub that owns all server state.

mod connection;
mod gateway;
mod hub;

pub use connection::Connection;
pub use gateway::Gateway;
pub use hub::{Hub, HubEvent};
