//! Configuration validation.
//!
//! Validates configuration at startup to catch errors before binding.

use super::Config;
use chatd_proto::NameExt;
use chatd_proto::limits::MAX_NAME_LEN;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password does not match expected regular expression: [a-zA-Z][_0-9a-zA-Z]*")]
    PasswordGrammar,
    #[error("Password must have length from 1-20 characters.")]
    PasswordLength,
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Check an operator password: grammar first, then length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !password.matches_name_grammar() {
        return Err(ValidationError::PasswordGrammar);
    }
    if password.len() > MAX_NAME_LEN {
        return Err(ValidationError::PasswordLength);
    }
    Ok(())
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(password) = config.operator.password.as_deref() {
        if let Err(e) = validate_password(password) {
            errors.push(e);
        }
    }

    let limits = &config.limits;
    for (name, value) in [
        ("send_queue", limits.send_queue),
        ("event_queue", limits.event_queue),
        ("event_batch", limits.event_batch),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroLimit(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_grammar_checked_before_length() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordGrammar));
        assert_eq!(validate_password("1abc"), Err(ValidationError::PasswordGrammar));
        assert_eq!(
            validate_password("a-b-c-d-e-f-g-h-i-j-k-l"),
            Err(ValidationError::PasswordGrammar)
        );
        assert_eq!(
            validate_password("abcdefghijklmnopqrstu"),
            Err(ValidationError::PasswordLength)
        );
    }

    #[test]
    fn password_accepts_boundaries() {
        assert_eq!(validate_password("a"), Ok(()));
        assert_eq!(validate_password("abcdefghijklmnopqrst"), Ok(()));
        assert_eq!(validate_password("Pass_word_1"), Ok(()));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn zero_limits_are_all_reported() {
        let mut config = Config::default();
        config.limits.send_queue = 0;
        config.limits.event_batch = 0;
        config.operator.password = Some("9lives".into());

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::PasswordGrammar,
                ValidationError::ZeroLimit("send_queue"),
                ValidationError::ZeroLimit("event_batch"),
            ]
        );
    }

    #[test]
    fn password_messages() {
        assert_eq!(
            ValidationError::PasswordLength.to_string(),
            "Password must have length from 1-20 characters."
        );
        assert_eq!(
            ValidationError::PasswordGrammar.to_string(),
            "Password does not match expected regular expression: [a-zA-Z][_0-9a-zA-Z]*"
        );
    }
}
