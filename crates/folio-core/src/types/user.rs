//! User account record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as persisted by a [`UserStore`](crate::traits::UserStore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Email address, unique and stored lowercase.
    pub email: String,
    /// Public handle, unique and lowercase; also the portfolio subdomain.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Hex-encoded password digest.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Hex-encoded per-credential salt.
    #[serde(skip_serializing)]
    pub password_salt: String,
    /// Whether the email address has been confirmed.
    pub email_verified: bool,
    /// Incremented to revoke every outstanding session.
    pub token_version: u32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new, unverified user with a fresh identifier.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
        password_hash: String,
        password_salt: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().simple().to_string(),
            email: email.into().trim().to_lowercase(),
            username: username.into().trim().to_lowercase(),
            name: name.into().trim().to_string(),
            password_hash,
            password_salt,
            email_verified: false,
            token_version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the identity fields carried in a session claim.
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }

    /// Replaces the credential and revokes all existing sessions.
    pub fn set_credential(&mut self, password_hash: String, password_salt: String) {
        self.password_hash = password_hash;
        self.password_salt = password_salt;
        self.revoke_sessions();
    }

    /// Bumps the token version so previously minted sessions stop validating.
    pub fn revoke_sessions(&mut self) {
        self.token_version = self.token_version.wrapping_add(1);
        self.updated_at = Utc::now();
    }

    /// Records that the email address has been confirmed.
    pub fn mark_email_verified(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }
}

/// Identity asserted by a session: who the bearer is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionIdentity {
    /// User identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            " A@B.com ",
            "johndoe",
            "John Doe",
            "hash".to_string(),
            "salt".to_string(),
        )
    }

    #[test]
    fn test_new_user_normalizes_email() {
        let user = sample();
        assert_eq!(user.email, "a@b.com");
        assert!(!user.email_verified);
        assert_eq!(user.token_version, 0);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_set_credential_revokes_sessions() {
        let mut user = sample();
        user.set_credential("h2".to_string(), "s2".to_string());
        assert_eq!(user.password_hash, "h2");
        assert_eq!(user.token_version, 1);
    }

    #[test]
    fn test_mark_email_verified_keeps_credential() {
        let mut user = sample();
        user.mark_email_verified();
        assert!(user.email_verified);
        assert_eq!(user.password_hash, "hash");
        assert_eq!(user.token_version, 0);
    }

    #[test]
    fn test_credential_not_serialized() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password_salt").is_none());
        assert_eq!(json["username"], "johndoe");
    }
}
