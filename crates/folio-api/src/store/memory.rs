//! In-memory user and token stores backed by `DashMap`.
//!
//! Suitable for development and tests; data does not survive a restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::{TokenStore, UserStore};
use folio_core::types::{StoredToken, TokenKind, User};

/// In-memory [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    /// Users keyed by ID.
    users: DashMap<String, User>,
    /// Serializes inserts so uniqueness checks and writes are atomic.
    insert_lock: Mutex<()>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `change` to the stored user while holding its shard lock.
    fn modify(&self, id: &str, change: impl FnOnce(&mut User)) -> AppResult<User> {
        let mut entry = self
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        change(entry.value_mut());
        Ok(entry.value().clone())
    }

    fn find_where(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users
            .iter()
            .find(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        let _guard = self
            .insert_lock
            .lock()
            .map_err(|_| AppError::storage("User store lock poisoned"))?;

        if self.find_where(|u| u.email == user.email).is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }
        if self.find_where(|u| u.username == user.username).is_some() {
            return Err(AppError::conflict("Username is already taken"));
        }

        self.users.insert(user.id.clone(), user.clone());
        debug!(user_id = %user.id, "User stored");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim().to_lowercase();
        Ok(self.find_where(|u| u.email == email))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let login = login.trim().to_lowercase();
        Ok(self.find_where(|u| u.email == login || u.username == login))
    }

    async fn set_credential(
        &self,
        id: &str,
        password_hash: String,
        password_salt: String,
    ) -> AppResult<User> {
        self.modify(id, |user| user.set_credential(password_hash, password_salt))
    }

    async fn revoke_sessions(&self, id: &str) -> AppResult<User> {
        self.modify(id, User::revoke_sessions)
    }

    async fn mark_email_verified(&self, id: &str) -> AppResult<User> {
        self.modify(id, User::mark_email_verified)
    }
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    /// Token records keyed by record ID.
    tokens: DashMap<Uuid, StoredToken>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn insert(&self, token: StoredToken) -> AppResult<()> {
        self.tokens.insert(token.id, token);
        Ok(())
    }

    async fn find_for_user(&self, user_id: &str, kind: TokenKind) -> AppResult<Vec<StoredToken>> {
        Ok(self
            .tokens
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.kind == kind)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tokens.remove(&id).is_some())
    }

    async fn remove_for_user(&self, user_id: &str, kind: TokenKind) -> AppResult<u64> {
        let before = self.tokens.len();
        self.tokens
            .retain(|_, token| !(token.user_id == user_id && token.kind == kind));
        Ok(before.saturating_sub(self.tokens.len()) as u64)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let before = self.tokens.len();
        self.tokens.retain(|_, token| !token.is_expired_at(now));
        Ok(before.saturating_sub(self.tokens.len()) as u64)
    }
}
