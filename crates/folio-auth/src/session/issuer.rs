//! Session token creation with HS256 signing and configurable TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use folio_core::config::AuthConfig;
use folio_core::error::AppError;
use folio_core::types::SessionIdentity;

use super::claims::SessionClaim;
use super::secret::SessionSecret;

/// Mints signed session tokens at login.
#[derive(Clone)]
pub struct SessionIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session lifetime in hours.
    ttl_hours: u64,
}

/// Result of a successful session mint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedSession {
    /// Compact signed token, the session cookie's value.
    pub token: String,
    /// Session expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl SessionIssuer {
    /// Creates an issuer signing with `secret`.
    pub fn new(secret: &SessionSecret, ttl_hours: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Creates an issuer from auth configuration and the startup secret.
    pub fn from_config(secret: &SessionSecret, config: &AuthConfig) -> Self {
        Self::new(secret, config.session_ttl_hours)
    }

    /// Session lifetime, or `None` if it is too large to represent.
    pub fn ttl(&self) -> Option<Duration> {
        i64::try_from(self.ttl_hours).ok().and_then(Duration::try_hours)
    }

    /// Mints a session for `identity` at the user's current `token_version`.
    pub fn issue(
        &self,
        identity: &SessionIdentity,
        token_version: u32,
    ) -> Result<IssuedSession, AppError> {
        self.issue_at(identity, token_version, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        identity: &SessionIdentity,
        token_version: u32,
        now: DateTime<Utc>,
    ) -> Result<IssuedSession, AppError> {
        let expires_at = self
            .ttl()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Session lifetime of {} hours is out of range",
                    self.ttl_hours
                ))
            })?;

        let claim = SessionClaim {
            id: identity.id.clone(),
            email: identity.email.clone(),
            username: identity.username.clone(),
            name: identity.name.clone(),
            ver: token_version,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claim, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedSession { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;

    fn secret() -> SessionSecret {
        SessionSecret::new("an-adequately-long-test-signing-secret").expect("valid secret")
    }

    fn identity() -> SessionIdentity {
        SessionIdentity {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            username: "johndoe".to_string(),
            name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_expiry_is_now_plus_ttl() {
        let now = Utc::now();
        let issued = SessionIssuer::new(&secret(), 720)
            .issue_at(&identity(), 0, now)
            .expect("issue");
        assert_eq!(issued.expires_at, now + Duration::hours(720));
    }

    #[test]
    fn test_unrepresentable_ttl_is_an_error() {
        let issuer = SessionIssuer::new(&secret(), 10_000_000_000_000);
        assert!(issuer.ttl().is_none());

        let err = issuer.issue(&identity(), 0).expect_err("ttl out of range");
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[test]
    fn test_ttl_overflowing_the_calendar_is_an_error() {
        // Representable as a duration, but past the last representable date.
        let issuer = SessionIssuer::new(&secret(), 24 * 365 * 300_000);
        assert!(issuer.ttl().is_some());

        let err = issuer.issue(&identity(), 0).expect_err("date out of range");
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
