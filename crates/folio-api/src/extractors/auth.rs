//! `AuthUser` extractor — reads the session cookie, verifies it, and checks the token version.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use tracing::debug;

use folio_auth::{SessionClaim, SessionRejection};
use folio_core::types::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Verified session claim.
    pub claim: SessionClaim,
    /// The user record the claim refers to, as currently stored.
    pub user: User,
}

impl std::ops::Deref for AuthUser {
    type Target = SessionClaim;
    fn deref(&self) -> &Self::Target {
        &self.claim
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claim = state.session_reader.read(&jar)?;

        // Sessions minted before the last revocation carry a stale version.
        let user = match state.users.find_by_id(&claim.id).await? {
            Some(user) if user.token_version == claim.ver => user,
            Some(_) => {
                debug!(user_id = %claim.id, "Session revoked by token version");
                return Err(SessionRejection::Invalid.into());
            }
            None => {
                debug!(user_id = %claim.id, "Session refers to unknown user");
                return Err(SessionRejection::Invalid.into());
            }
        };

        Ok(AuthUser { claim, user })
    }
}
