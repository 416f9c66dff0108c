//! Persisted form of reset and verification tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a one-time token authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Confirms ownership of an email address.
    Verification,
    /// Authorizes setting a new password.
    Reset,
}

impl TokenKind {
    /// Lifetime applied when configuration does not override it.
    pub fn default_lifetime_hours(&self) -> u32 {
        match self {
            TokenKind::Verification => 24,
            TokenKind::Reset => 1,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Verification => write!(f, "verification"),
            TokenKind::Reset => write!(f, "reset"),
        }
    }
}

/// A token digest persisted with its owner and expiry.
///
/// The plaintext token is never part of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredToken {
    /// Record identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: String,
    /// What the token authorizes.
    pub kind: TokenKind,
    /// Hex-encoded digest of the plaintext token.
    pub hashed_token: String,
    /// Issuance time.
    pub created_at: DateTime<Utc>,
    /// Instant after which the token is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

impl StoredToken {
    /// Creates a record for a freshly issued token.
    pub fn new(
        user_id: impl Into<String>,
        kind: TokenKind,
        hashed_token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            kind,
            hashed_token: hashed_token.into(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Whether the token has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_default_lifetimes() {
        assert_eq!(TokenKind::Verification.default_lifetime_hours(), 24);
        assert_eq!(TokenKind::Reset.default_lifetime_hours(), 1);
    }

    #[test]
    fn test_expiry_boundary() {
        let expires_at = Utc::now() + Duration::hours(1);
        let token = StoredToken::new("u1", TokenKind::Reset, "abc", expires_at);
        assert!(!token.is_expired_at(expires_at - Duration::seconds(1)));
        assert!(token.is_expired_at(expires_at));
    }
}
