//! # folio-api
//!
//! HTTP API layer for Folio built on Axum.
//!
//! Provides the authentication endpoints, the session cookie extractor,
//! error mapping, the token mailer seam, and in-memory store implementations.

pub mod app;
pub mod cleanup;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mailer;
pub mod router;
pub mod state;
pub mod store;
pub mod tokens;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
