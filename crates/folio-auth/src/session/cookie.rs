//! Cookie lookup abstraction and session cookie naming.

use std::collections::{BTreeMap, HashMap};

/// Name prefix browsers only accept on cookies set over HTTPS with `Secure`.
pub const SECURE_COOKIE_PREFIX: &str = "__Secure-";

/// A request's cookie collection.
pub trait CookieSource {
    /// Value of the cookie called `name`, if present.
    fn cookie_value(&self, name: &str) -> Option<&str>;
}

impl CookieSource for HashMap<String, String> {
    fn cookie_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl CookieSource for BTreeMap<String, String> {
    fn cookie_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[cfg(feature = "axum")]
impl CookieSource for axum_extra::extract::CookieJar {
    fn cookie_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|cookie| cookie.value())
    }
}

/// The session cookie name for a deployment: prefixed when cookies are `Secure`.
pub fn resolve_cookie_name(base: &str, secure: bool) -> String {
    if secure {
        format!("{SECURE_COOKIE_PREFIX}{base}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cookie_name() {
        assert_eq!(resolve_cookie_name("folio.session-token", false), "folio.session-token");
        assert_eq!(
            resolve_cookie_name("folio.session-token", true),
            "__Secure-folio.session-token"
        );
    }

    #[test]
    fn test_map_sources() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), "1".to_string());
        assert_eq!(map.cookie_value("a"), Some("1"));
        assert_eq!(map.cookie_value("b"), None);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_cookie_jar_source() {
        use axum_extra::extract::cookie::{Cookie, CookieJar};

        let jar = CookieJar::new().add(Cookie::new("folio.session-token", "abc"));
        assert_eq!(jar.cookie_value("folio.session-token"), Some("abc"));
        assert_eq!(jar.cookie_value("missing"), None);
    }
}
