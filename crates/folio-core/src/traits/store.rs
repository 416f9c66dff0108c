//! Persistence seams for user accounts and one-time tokens.
//!
//! The document database lives outside this workspace; these traits are
//! the only surface the auth flows need from it. Writes to an existing
//! user touch only the fields they name, so concurrent flows cannot
//! overwrite each other's changes with a stale copy.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::{StoredToken, TokenKind, User};

/// User account persistence.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a new user. Fails with a conflict if the email or username is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Find a user by identifier.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Find a user by email address (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by email address or username.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Replace the credential and bump the token version in one step.
    ///
    /// Returns the updated user; fails with not-found if the user does not exist.
    async fn set_credential(
        &self,
        id: &str,
        password_hash: String,
        password_salt: String,
    ) -> AppResult<User>;

    /// Bump the token version, leaving every other field untouched.
    async fn revoke_sessions(&self, id: &str) -> AppResult<User>;

    /// Mark the email address verified, leaving every other field untouched.
    async fn mark_email_verified(&self, id: &str) -> AppResult<User>;
}

/// One-time token persistence.
///
/// Only token digests are stored. Implementations must make [`remove`]
/// atomic so a token can be consumed at most once.
///
/// [`remove`]: TokenStore::remove
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Persist a token record.
    async fn insert(&self, token: StoredToken) -> AppResult<()>;

    /// All records of `kind` owned by `user_id`, expired ones included.
    async fn find_for_user(&self, user_id: &str, kind: TokenKind) -> AppResult<Vec<StoredToken>>;

    /// Delete a record. Returns `true` only for the caller that removed it.
    async fn remove(&self, id: Uuid) -> AppResult<bool>;

    /// Delete every record of `kind` owned by `user_id`. Returns the count removed.
    async fn remove_for_user(&self, user_id: &str, kind: TokenKind) -> AppResult<u64>;

    /// Delete every record that has expired at `now`. Returns the count removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
