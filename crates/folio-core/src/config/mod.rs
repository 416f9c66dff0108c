//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `FOLIO__`-prefixed environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{Environment, ServerConfig};
pub use self::auth::{
    AuthConfig, MAX_CLEANUP_INTERVAL_MINUTES, MAX_SESSION_TTL_HOURS, MAX_TOKEN_TTL_HOURS,
    MIN_SESSION_SECRET_BYTES,
};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay, and
    /// environment variables prefixed with `FOLIO__` (e.g.
    /// `FOLIO__AUTH__SESSION_SECRET`), then validates the result.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the server must not start with.
    pub fn validate(&self) -> Result<(), AppError> {
        let auth = &self.auth;

        if auth.session_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.session_secret must be set"));
        }
        if auth.session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "auth.session_secret must be at least {MIN_SESSION_SECRET_BYTES} bytes"
            )));
        }
        if auth.session_cookie_name.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.session_cookie_name must not be empty",
            ));
        }
        if auth.session_ttl_hours == 0
            || auth.verification_token_ttl_hours == 0
            || auth.reset_token_ttl_hours == 0
        {
            return Err(AppError::configuration(
                "auth token and session lifetimes must be greater than zero",
            ));
        }
        if auth.session_ttl_hours > MAX_SESSION_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.session_ttl_hours must not exceed {MAX_SESSION_TTL_HOURS}"
            )));
        }
        if auth.verification_token_ttl_hours > MAX_TOKEN_TTL_HOURS
            || auth.reset_token_ttl_hours > MAX_TOKEN_TTL_HOURS
        {
            return Err(AppError::configuration(format!(
                "auth token lifetimes must not exceed {MAX_TOKEN_TTL_HOURS} hours"
            )));
        }
        if auth.token_cleanup_interval_minutes == 0
            || auth.token_cleanup_interval_minutes > MAX_CLEANUP_INTERVAL_MINUTES
        {
            return Err(AppError::configuration(format!(
                "auth.token_cleanup_interval_minutes must be between 1 and {MAX_CLEANUP_INTERVAL_MINUTES}"
            )));
        }

        Ok(())
    }
}
