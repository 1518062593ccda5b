//! Connection lifecycle handlers.
//!
//! Handles USER, QUIT and the cleanup shared by QUIT and transport close.

pub mod quit;
pub mod user;

pub use quit::disconnect;
