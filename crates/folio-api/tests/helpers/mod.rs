//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use folio_api::mailer::TokenMailer;
use folio_api::store::{MemoryTokenStore, MemoryUserStore};
use folio_api::{AppState, build_app};
use folio_core::config::AppConfig;
use folio_core::result::AppResult;
use folio_core::types::{TokenKind, User};

pub const TEST_SECRET: &str = "integration-test-signing-secret-0123456789";
pub const STRONG_PASSWORD: &str = "plum-Harbor-42-lantern";

/// Mailer that records every delivered plaintext token.
#[derive(Debug, Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<(String, TokenKind, String)>>,
}

impl CapturingMailer {
    /// Most recent token of `kind` sent to `email`.
    pub fn last_token(&self, email: &str, kind: TokenKind) -> Option<String> {
        self.sent
            .lock()
            .expect("mailer lock")
            .iter()
            .rev()
            .find(|(to, k, _)| to == email && *k == kind)
            .map(|(_, _, token)| token.clone())
    }

    /// Number of tokens sent.
    pub fn count(&self) -> usize {
        self.sent.lock().expect("mailer lock").len()
    }
}

#[async_trait]
impl TokenMailer for CapturingMailer {
    async fn send_token(&self, user: &User, kind: TokenKind, token: &str) -> AppResult<()> {
        self.sent
            .lock()
            .expect("mailer lock")
            .push((user.email.clone(), kind, token.to_string()));
        Ok(())
    }
}

/// Response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// `name=value` of the first `Set-Cookie` header, ready for a `Cookie` header.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookies
            .first()
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub users: Arc<MemoryUserStore>,
    pub tokens: Arc<MemoryTokenStore>,
    pub mailer: Arc<CapturingMailer>,
}

impl TestApp {
    /// Create a new test application in the development environment.
    pub fn new() -> Self {
        Self::with_environment("development")
    }

    /// Create a new test application for `environment`.
    pub fn with_environment(environment: &str) -> Self {
        let config = AppConfig::from_toml(&format!(
            "[server]\nenvironment = \"{environment}\"\n[auth]\nsession_secret = \"{TEST_SECRET}\"\n"
        ))
        .expect("test config");

        let users = Arc::new(MemoryUserStore::new());
        let tokens = Arc::new(MemoryTokenStore::new());
        let mailer = Arc::new(CapturingMailer::default());

        let state = AppState::new(config, users.clone(), tokens.clone(), mailer.clone())
            .expect("app state");

        Self {
            router: build_app(state.clone()),
            state,
            users,
            tokens,
            mailer,
        }
    }

    /// Send a request through the router.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }

    /// Register a user with the strong test password.
    pub async fn register(&self, email: &str, username: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": email,
                "username": username,
                "name": "John Doe",
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await
    }

    /// Log in and return the session cookie.
    pub async fn login(&self, login: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "login": login, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.session_cookie().expect("session cookie")
    }
}
