//! Delivery seam for one-time tokens.

use async_trait::async_trait;
use tracing::info;

use folio_core::result::AppResult;
use folio_core::types::{TokenKind, User};

/// Sends a freshly issued plaintext token to its owner.
///
/// Implementations must not persist the token.
#[async_trait]
pub trait TokenMailer: Send + Sync + 'static {
    /// Delivers `token` of `kind` to `user`.
    async fn send_token(&self, user: &User, kind: TokenKind, token: &str) -> AppResult<()>;
}

/// Development mailer: writes the link to the log instead of sending mail.
#[derive(Debug, Clone)]
pub struct LogMailer {
    base_url: String,
}

impl LogMailer {
    /// Creates a mailer building links against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The link a user follows to redeem `token`.
    pub fn link(&self, kind: TokenKind, token: &str) -> String {
        let path = match kind {
            TokenKind::Verification => "verify-email",
            TokenKind::Reset => "reset-password",
        };
        format!("{}/{path}?token={token}", self.base_url)
    }
}

#[async_trait]
impl TokenMailer for LogMailer {
    async fn send_token(&self, user: &User, kind: TokenKind, token: &str) -> AppResult<()> {
        info!(
            user_id = %user.id,
            kind = %kind,
            link = %self.link(kind, token),
            "Token link issued (mail delivery disabled)"
        );
        Ok(())
    }
}
