//! Auth handlers — register, login, logout, logout-all, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tracing::{info, warn};
use validator::Validate;

use folio_core::error::AppError;
use folio_core::types::{TokenKind, User};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, SessionResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;
use crate::tokens;

/// Single message for every login failure.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Verified against when the login names no account, so both paths hash once.
const DUMMY_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const DUMMY_SALT: &str = "00000000000000000000000000000000";

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()?;
    state
        .password_validator
        .validate(
            &req.password,
            &[req.email.as_str(), req.username.as_str(), req.name.as_str()],
        )?;

    let credential = state.hasher.hash(&req.password, None);
    let user = state
        .users
        .insert(User::new(
            &req.email,
            &req.username,
            &req.name,
            credential.hash,
            credential.salt,
        ))
        .await?;

    info!(user_id = %user.id, username = %user.username, "User registered");

    tokens::issue_for(&state, &user, TokenKind::Verification).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(&user))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()?;

    let user = state.users.find_by_login(&req.login).await?;
    let user = match user {
        Some(user) if state.verifier.verify(&req.password, &user.password_hash, &user.password_salt) => {
            user
        }
        Some(user) => {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS).into());
        }
        None => {
            let _ = state.verifier.verify(&req.password, DUMMY_HASH, DUMMY_SALT);
            warn!("Login failed: unknown account");
            return Err(AppError::authentication(INVALID_CREDENTIALS).into());
        }
    };

    let session = state
        .session_issuer
        .issue(&user.identity(), user.token_version)?;

    info!(user_id = %user.id, expires_at = %session.expires_at, "Login successful");

    let jar = jar.add(state.cookies.session_cookie(session.token));
    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            user: UserResponse::from(&user),
            expires_at: session.expires_at,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Clears the cookie whether or not the session was still valid.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = jar.remove(state.cookies.removal_cookie());
    (
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    )
}

/// POST /api/auth/logout-all
pub async fn logout_all(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    let user = state.users.revoke_sessions(&auth.user.id).await?;

    info!(user_id = %user.id, token_version = user.token_version, "All sessions revoked");

    let jar = jar.remove(state.cookies.removal_cookie());
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new(
            "Logged out of all sessions",
        ))),
    ))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse::from(&auth.claim)))
}
