//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Minimum accepted length of the session signing secret, in bytes.
pub const MIN_SESSION_SECRET_BYTES: usize = 32;

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 366;

/// Longest accepted reset or verification token lifetime: thirty days.
pub const MAX_TOKEN_TTL_HOURS: u32 = 24 * 30;

/// Longest accepted interval between expired-token purges: one day.
pub const MAX_CLEANUP_INTERVAL_MINUTES: u64 = 24 * 60;

/// Authentication, token, and session cookie configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign session tokens.
    ///
    /// There is no default: a deployment without a secret must not start.
    pub session_secret: String,
    /// Base name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub session_cookie_name: String,
    /// Session lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Email verification token lifetime in hours.
    #[serde(default = "default_verification_ttl")]
    pub verification_token_ttl_hours: u32,
    /// Password reset token lifetime in hours.
    #[serde(default = "default_reset_ttl")]
    pub reset_token_ttl_hours: u32,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Interval between expired-token purges, in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub token_cleanup_interval_minutes: u64,
    /// Public base URL used to build links sent to users.
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_secret", &"<redacted>")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field(
                "verification_token_ttl_hours",
                &self.verification_token_ttl_hours,
            )
            .field("reset_token_ttl_hours", &self.reset_token_ttl_hours)
            .field("password_min_length", &self.password_min_length)
            .field(
                "token_cleanup_interval_minutes",
                &self.token_cleanup_interval_minutes,
            )
            .field("app_base_url", &self.app_base_url)
            .finish()
    }
}

fn default_cookie_name() -> String {
    "folio.session-token".to_string()
}

fn default_session_ttl() -> u64 {
    30 * 24
}

fn default_verification_ttl() -> u32 {
    24
}

fn default_reset_ttl() -> u32 {
    1
}

fn default_password_min() -> usize {
    8
}

fn default_cleanup_interval() -> u64 {
    15
}

fn default_app_base_url() -> String {
    "http://localhost:3000".to_string()
}
