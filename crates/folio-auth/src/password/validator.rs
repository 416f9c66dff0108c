//! Password policy enforcement for new passwords.

use folio_core::config::AuthConfig;
use folio_core::error::AppError;

/// Validates password strength before a credential is derived from it.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_min_length(config.password_min_length)
    }

    /// Creates a validator with an explicit minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validates a password against all configured policies.
    ///
    /// `user_inputs` are account fields (email, username, name) that the
    /// entropy estimate should treat as guessable.
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(AppError::validation(
                "Password must contain at least one letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        let estimate = zxcvbn::zxcvbn(password, user_inputs);
        if estimate.score() < zxcvbn::Score::Two {
            return Err(AppError::validation(
                "Password is too easy to guess. Please choose a stronger password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;

    fn validator() -> PasswordValidator {
        PasswordValidator::with_min_length(8)
    }

    #[test]
    fn test_accepts_strong_password() {
        assert!(validator().validate("plum-Harbor-42-lantern", &[]).is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        let err = validator().validate("a1b2", &[]).expect_err("too short");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("at least 8"));
    }

    #[test]
    fn test_rejects_missing_digit() {
        let err = validator()
            .validate("plum-harbor-lantern", &[])
            .expect_err("no digit");
        assert!(err.message.contains("digit"));
    }

    #[test]
    fn test_rejects_missing_letter() {
        let err = validator().validate("12345678901", &[]).expect_err("no letter");
        assert!(err.message.contains("letter"));
    }

    #[test]
    fn test_rejects_guessable_password() {
        let err = validator().validate("password1", &[]).expect_err("guessable");
        assert!(err.message.contains("stronger"));
    }
}
