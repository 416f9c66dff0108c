//! Session cookie extraction and signature verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use super::claims::SessionClaim;
use super::cookie::CookieSource;
use super::secret::SessionSecret;

/// Why a request carries no usable session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionRejection {
    /// No session cookie was presented.
    #[error("Not authenticated")]
    Unauthenticated,
    /// A session cookie was presented but is malformed, forged, or expired.
    #[error("Invalid session")]
    Invalid,
}

/// Verifies signed session cookies.
///
/// Pure: no store lookups. Revocation beyond expiry is layered on top by
/// comparing [`SessionClaim::ver`] with the user's current token version.
#[derive(Clone)]
pub struct SessionReader {
    /// Name of the session cookie.
    cookie_name: String,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionReader")
            .field("cookie_name", &self.cookie_name)
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionReader {
    /// Creates a reader for the cookie called `cookie_name`, verifying with `secret`.
    pub fn new(cookie_name: impl Into<String>, secret: &SessionSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // clock skew

        Self {
            cookie_name: cookie_name.into(),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Name of the cookie this reader looks for.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Reads and verifies the session cookie from `cookies`.
    pub fn read<C>(&self, cookies: &C) -> Result<SessionClaim, SessionRejection>
    where
        C: CookieSource + ?Sized,
    {
        let token = cookies
            .cookie_value(&self.cookie_name)
            .ok_or(SessionRejection::Unauthenticated)?;
        self.verify(token)
    }

    /// Verifies a raw session token.
    pub fn verify(&self, token: &str) -> Result<SessionClaim, SessionRejection> {
        decode::<SessionClaim>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => debug!("Session token has expired"),
                    JwtErrorKind::InvalidSignature => debug!("Session token signature mismatch"),
                    _ => debug!(error = %e, "Session token rejected"),
                }
                SessionRejection::Invalid
            })
    }
}
