//! Password reset handlers.

use axum::Json;
use axum::extract::State;
use tracing::{debug, info};
use validator::Validate;

use folio_core::error::AppError;
use folio_core::types::TokenKind;

use crate::dto::request::{ForgotPasswordRequest, ResetPasswordRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::tokens::{self, INVALID_TOKEN_MESSAGE};

/// POST /api/auth/password/forgot
///
/// Answers identically whether or not the account exists.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()?;

    match state.users.find_by_email(&req.email).await? {
        Some(user) => tokens::issue_for(&state, &user, TokenKind::Reset).await?,
        None => debug!("Password reset requested for unknown email"),
    }

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "If an account exists for that email, a reset link has been sent",
    ))))
}

/// POST /api/auth/password/reset
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()?;

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::token_rejected(INVALID_TOKEN_MESSAGE))?;

    let record = tokens::find_valid(&state, &user.id, TokenKind::Reset, &req.token)
        .await?
        .ok_or_else(|| AppError::token_rejected(INVALID_TOKEN_MESSAGE))?;

    // Checked only after the token proves the caller controls the account.
    state.password_validator.validate(
        &req.new_password,
        &[user.email.as_str(), user.username.as_str(), user.name.as_str()],
    )?;
    if state
        .verifier
        .verify(&req.new_password, &user.password_hash, &user.password_salt)
    {
        return Err(AppError::validation(
            "New password must be different from the current password",
        )
        .into());
    }

    tokens::consume(&state, &record).await?;

    let credential = state.hasher.hash(&req.new_password, None);
    let user = state
        .users
        .set_credential(&user.id, credential.hash, credential.salt)
        .await?;
    state.tokens.remove_for_user(&user.id, TokenKind::Reset).await?;

    info!(user_id = %user.id, "Password reset; existing sessions revoked");

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password has been reset",
    ))))
}
