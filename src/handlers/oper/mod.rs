//! Operator commands.

pub mod auth;
