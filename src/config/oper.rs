//! Operator password configuration.

use serde::Deserialize;

/// The single server-wide operator password.
///
/// Without a password nobody can become an operator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperatorConfig {
    #[serde(default)]
    pub password: Option<String>,
}

impl OperatorConfig {
    /// Verify the provided password against the configured one.
    pub fn verify_password(&self, password: &str) -> bool {
        self.password.as_deref() == Some(password)
    }
}
