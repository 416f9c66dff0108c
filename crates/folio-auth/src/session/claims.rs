//! Session claim carried inside the signed cookie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::types::SessionIdentity;

/// Signed identity assertion embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaim {
    /// User ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// The user's token version when the session was minted.
    pub ver: u32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaim {
    /// Returns the identity portion of the claim.
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
