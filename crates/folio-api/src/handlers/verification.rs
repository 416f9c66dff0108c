//! Email verification handlers.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use folio_core::error::AppError;
use folio_core::types::TokenKind;

use crate::dto::request::VerifyEmailRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;
use crate::tokens::{self, INVALID_TOKEN_MESSAGE};

/// POST /api/auth/verify-email/request
pub async fn request_verification(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if auth.user.email_verified {
        return Err(AppError::validation("Email address is already verified").into());
    }

    tokens::issue_for(&state, &auth.user, TokenKind::Verification).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Verification email sent",
    ))))
}

/// POST /api/auth/verify-email/confirm
pub async fn confirm_verification(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()?;

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::token_rejected(INVALID_TOKEN_MESSAGE))?;

    tokens::redeem(&state, &user.id, TokenKind::Verification, &req.token).await?;

    let user = state.users.mark_email_verified(&user.id).await?;
    state
        .tokens
        .remove_for_user(&user.id, TokenKind::Verification)
        .await?;

    info!(user_id = %user.id, "Email verified");

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Email address verified",
    ))))
}
