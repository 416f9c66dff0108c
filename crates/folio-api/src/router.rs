//! Route definitions for the Folio HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(auth_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/logout-all", post(handlers::auth::logout_all))
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/auth/verify-email/request",
            post(handlers::verification::request_verification),
        )
        .route(
            "/auth/verify-email/confirm",
            post(handlers::verification::confirm_verification),
        )
        .route(
            "/auth/password/forgot",
            post(handlers::password::forgot_password),
        )
        .route(
            "/auth/password/reset",
            post(handlers::password::reset_password),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
