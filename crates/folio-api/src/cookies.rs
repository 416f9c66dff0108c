//! Session cookie attributes, chosen per deployment environment.

use axum_extra::extract::cookie::{Cookie, SameSite};

use folio_auth::session::resolve_cookie_name;
use folio_core::config::AppConfig;

/// How the session cookie is written, derived from the deployment environment.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    /// Resolved cookie name (prefixed in production).
    pub name: String,
    /// Whether the cookie is marked `Secure`.
    pub secure: bool,
    /// Cookie lifetime in seconds.
    pub max_age_seconds: i64,
}

impl CookieSettings {
    /// Derives cookie settings from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let secure = config.server.environment.is_production();
        let max_age_hours = i64::try_from(config.auth.session_ttl_hours).unwrap_or(i64::MAX / 3600);
        Self {
            name: resolve_cookie_name(&config.auth.session_cookie_name, secure),
            secure,
            max_age_seconds: max_age_hours.saturating_mul(3600),
        }
    }

    /// The session cookie carrying `token`.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.max_age_seconds))
            .build()
    }

    /// A cookie that, when removed from a jar, clears the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build(self.name.clone()).path("/").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> AppConfig {
        AppConfig::from_toml(&format!(
            "[server]\nenvironment = \"{environment}\"\n[auth]\nsession_secret = \"0123456789abcdef0123456789abcdef\"\nsession_ttl_hours = 2\n"
        ))
        .expect("config")
    }

    #[test]
    fn test_development_cookie() {
        let settings = CookieSettings::from_config(&config("development"));
        let cookie = settings.session_cookie("tok".to_string());

        assert_eq!(cookie.name(), "folio.session-token");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(2)));
    }

    #[test]
    fn test_production_cookie_is_secure_and_prefixed() {
        let settings = CookieSettings::from_config(&config("production"));
        let cookie = settings.session_cookie("tok".to_string());

        assert_eq!(cookie.name(), "__Secure-folio.session-token");
        assert_eq!(cookie.secure(), Some(true));
    }
}
