//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_auth::SessionClaim;
use folio_core::types::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Whether the email address is confirmed.
    pub email_verified: bool,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            email_verified: user.email_verified,
            created_at: user.created_at,
        }
    }
}

/// Login response; the session itself travels in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// Session expiration.
    pub expires_at: DateTime<Utc>,
}

/// Current session as seen by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// User ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Session expiration.
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&SessionClaim> for SessionResponse {
    fn from(claim: &SessionClaim) -> Self {
        Self {
            id: claim.id.clone(),
            email: claim.email.clone(),
            username: claim.username.clone(),
            name: claim.name.clone(),
            expires_at: claim.expires_at(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Server version.
    pub version: String,
}
