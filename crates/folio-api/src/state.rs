//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use folio_auth::{
    CredentialHasher, PasswordValidator, PasswordVerifier, SessionIssuer, SessionReader,
    SessionSecret, TokenIssuer, TokenLifetimes,
};
use folio_core::config::AppConfig;
use folio_core::result::AppResult;
use folio_core::traits::{TokenStore, UserStore};

use crate::cookies::CookieSettings;
use crate::mailer::TokenMailer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session cookie attributes
    pub cookies: Arc<CookieSettings>,

    // ── Stores ───────────────────────────────────────────────
    /// User accounts
    pub users: Arc<dyn UserStore>,
    /// Reset and verification token digests
    pub tokens: Arc<dyn TokenStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Salted credential hasher
    pub hasher: Arc<CredentialHasher>,
    /// Constant-time password verifier
    pub verifier: Arc<PasswordVerifier>,
    /// Password policy
    pub password_validator: Arc<PasswordValidator>,
    /// One-time token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Token lifetime per kind
    pub token_lifetimes: TokenLifetimes,
    /// Session token minting
    pub session_issuer: Arc<SessionIssuer>,
    /// Session cookie verification
    pub session_reader: Arc<SessionReader>,

    // ── Delivery ─────────────────────────────────────────────
    /// Plaintext token delivery
    pub mailer: Arc<dyn TokenMailer>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("cookies", &self.cookies)
            .field("session_reader", &self.session_reader)
            .finish()
    }
}

impl AppState {
    /// Wires the auth components from configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        tokens: Arc<dyn TokenStore>,
        mailer: Arc<dyn TokenMailer>,
    ) -> AppResult<Self> {
        config.validate()?;
        let secret = SessionSecret::from_config(&config.auth)?;
        let cookies = CookieSettings::from_config(&config);
        let hasher = CredentialHasher::new();

        Ok(Self {
            cookies: Arc::new(cookies.clone()),
            users,
            tokens,
            verifier: Arc::new(PasswordVerifier::new(hasher.clone())),
            hasher: Arc::new(hasher),
            password_validator: Arc::new(PasswordValidator::new(&config.auth)),
            token_issuer: Arc::new(TokenIssuer::new()),
            token_lifetimes: TokenLifetimes::from_config(&config.auth),
            session_issuer: Arc::new(SessionIssuer::from_config(&secret, &config.auth)),
            session_reader: Arc::new(SessionReader::new(cookies.name, &secret)),
            mailer,
            config: Arc::new(config),
        })
    }
}
