//! Token expiry computation.

use chrono::{DateTime, Duration, Utc};

use folio_core::config::AuthConfig;
use folio_core::types::TokenKind;

/// Lifetime used when the caller has no more specific policy.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: u32 = 1;

/// Returns `now + lifetime_hours`.
///
/// Saturates at the latest representable instant.
pub fn create_expiration_date(lifetime_hours: u32) -> DateTime<Utc> {
    expiration_from(Utc::now(), lifetime_hours)
}

fn expiration_from(now: DateTime<Utc>, lifetime_hours: u32) -> DateTime<Utc> {
    Duration::try_hours(i64::from(lifetime_hours))
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Configured lifetime per token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    /// Email verification token lifetime, in hours.
    pub verification_hours: u32,
    /// Password reset token lifetime, in hours.
    pub reset_hours: u32,
}

impl TokenLifetimes {
    /// Reads lifetimes from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            verification_hours: config.verification_token_ttl_hours,
            reset_hours: config.reset_token_ttl_hours,
        }
    }

    /// Lifetime for tokens of `kind`, in hours.
    pub fn hours(&self, kind: TokenKind) -> u32 {
        match kind {
            TokenKind::Verification => self.verification_hours,
            TokenKind::Reset => self.reset_hours,
        }
    }

    /// Expiry timestamp for a token of `kind` issued now.
    pub fn expires_at(&self, kind: TokenKind) -> DateTime<Utc> {
        create_expiration_date(self.hours(kind))
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            verification_hours: TokenKind::Verification.default_lifetime_hours(),
            reset_hours: TokenKind::Reset.default_lifetime_hours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_expiration_date_within_tolerance() {
        let before = Utc::now();
        let expires = create_expiration_date(DEFAULT_TOKEN_LIFETIME_HOURS);
        let after = Utc::now();

        let epsilon = Duration::seconds(1);
        assert!(expires >= before + Duration::hours(1) - epsilon);
        assert!(expires <= after + Duration::hours(1) + epsilon);
    }

    #[test]
    fn test_expiration_from_is_exact() {
        let now = Utc::now();
        assert_eq!(expiration_from(now, 24), now + Duration::hours(24));
        assert_eq!(expiration_from(now, 0), now);
    }

    #[test]
    fn test_huge_lifetime_saturates() {
        assert_eq!(
            create_expiration_date(u32::MAX),
            DateTime::<Utc>::MAX_UTC
        );
    }

    #[test]
    fn test_default_lifetimes_by_kind() {
        let lifetimes = TokenLifetimes::default();
        assert_eq!(lifetimes.hours(TokenKind::Verification), 24);
        assert_eq!(lifetimes.hours(TokenKind::Reset), 1);
    }

    #[test]
    fn test_expires_at_uses_kind() {
        let lifetimes = TokenLifetimes {
            verification_hours: 48,
            reset_hours: 2,
        };
        let reset = lifetimes.expires_at(TokenKind::Reset);
        let verification = lifetimes.expires_at(TokenKind::Verification);
        assert!(verification - reset >= Duration::hours(45));
    }
}
