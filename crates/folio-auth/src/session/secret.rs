//! Process-wide session signing secret.

use folio_core::config::{AuthConfig, MIN_SESSION_SECRET_BYTES};
use folio_core::error::AppError;

/// HMAC key for session tokens, established once at startup.
///
/// Construction fails for an empty or short secret; there is no fallback.
#[derive(Clone)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    /// Wraps `secret`, rejecting values shorter than [`MIN_SESSION_SECRET_BYTES`].
    pub fn new(secret: impl Into<String>) -> Result<Self, AppError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AppError::configuration("Session secret must be set"));
        }
        if secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "Session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes"
            )));
        }
        Ok(Self(secret.into_bytes()))
    }

    /// Reads the secret from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Self::new(config.session_secret.clone())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionSecret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;

    #[test]
    fn test_rejects_empty_and_short() {
        assert_eq!(
            SessionSecret::new("").expect_err("empty").kind,
            ErrorKind::Configuration
        );
        assert!(SessionSecret::new("too-short").is_err());
    }

    #[test]
    fn test_accepts_long_secret() {
        let secret = SessionSecret::new("x".repeat(MIN_SESSION_SECRET_BYTES)).expect("valid");
        assert_eq!(format!("{secret:?}"), "SessionSecret(<redacted>)");
    }
}
