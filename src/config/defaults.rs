//! Default value functions for configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// All interfaces, port chosen by the OS.
pub fn default_listen_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
}
