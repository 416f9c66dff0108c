//! Issue and redeem one-time tokens against the token store.

use chrono::Utc;
use tracing::{info, warn};

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::types::{StoredToken, TokenKind, User};

use crate::state::AppState;

/// Message for every unusable token, whatever the reason.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Replaces any outstanding `kind` tokens for `user` with a new one and delivers it.
pub async fn issue_for(state: &AppState, user: &User, kind: TokenKind) -> AppResult<()> {
    state.tokens.remove_for_user(&user.id, kind).await?;

    let issued = state.token_issuer.issue();
    let expires_at = state.token_lifetimes.expires_at(kind);
    state
        .tokens
        .insert(StoredToken::new(
            user.id.clone(),
            kind,
            issued.hashed_token,
            expires_at,
        ))
        .await?;

    info!(user_id = %user.id, kind = %kind, expires_at = %expires_at, "Token issued");

    state.mailer.send_token(user, kind, &issued.token).await
}

/// Finds the unexpired `kind` record owned by `user_id` whose digest matches `token`.
///
/// Every candidate is compared in constant time; nothing is consumed.
pub async fn find_valid(
    state: &AppState,
    user_id: &str,
    kind: TokenKind,
    token: &str,
) -> AppResult<Option<StoredToken>> {
    let now = Utc::now();
    let candidates = state.tokens.find_for_user(user_id, kind).await?;

    let mut found = None;
    for candidate in candidates {
        let matches = state.token_issuer.matches(token, &candidate.hashed_token);
        if matches && !candidate.is_expired_at(now) && found.is_none() {
            found = Some(candidate);
        }
    }
    Ok(found)
}

/// Consumes `record`. Fails if another request consumed it first.
pub async fn consume(state: &AppState, record: &StoredToken) -> AppResult<()> {
    if state.tokens.remove(record.id).await? {
        Ok(())
    } else {
        warn!(user_id = %record.user_id, kind = %record.kind, "Token already consumed");
        Err(AppError::token_rejected(INVALID_TOKEN_MESSAGE))
    }
}

/// Finds and consumes a token in one step.
pub async fn redeem(
    state: &AppState,
    user_id: &str,
    kind: TokenKind,
    token: &str,
) -> AppResult<StoredToken> {
    let record = find_valid(state, user_id, kind, token)
        .await?
        .ok_or_else(|| AppError::token_rejected(INVALID_TOKEN_MESSAGE))?;
    consume(state, &record).await?;
    Ok(record)
}
