//! Token generation and digest matching.

use crate::crypto;

/// Number of random bytes in a plaintext token.
pub const TOKEN_BYTES: usize = 32;

/// A freshly issued token pair.
///
/// `token` goes to the user (typically inside an emailed link) and is never
/// persisted; `hashed_token` is what the store keeps.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Plaintext token, hex-encoded.
    pub token: String,
    /// SHA-256 digest of `token`, hex-encoded.
    pub hashed_token: String,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"<redacted>")
            .field("hashed_token", &self.hashed_token)
            .finish()
    }
}

/// Issues random tokens and checks presented tokens against stored digests.
#[derive(Debug, Clone, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    /// Creates a new token issuer.
    pub fn new() -> Self {
        Self
    }

    /// Generates a new token and its digest.
    pub fn issue(&self) -> IssuedToken {
        let token = crypto::random_hex(TOKEN_BYTES);
        let hashed_token = Self::digest(&token);
        IssuedToken {
            token,
            hashed_token,
        }
    }

    /// One-way digest of a plaintext token, hex-encoded.
    pub fn digest(token: &str) -> String {
        crypto::sha256_hex(&[token.as_bytes()])
    }

    /// Whether `token` is the plaintext behind `stored_hash`.
    ///
    /// Compares in constant time; a malformed stored hash never matches.
    pub fn matches(&self, token: &str, stored_hash: &str) -> bool {
        crypto::hex_digests_match(stored_hash, &Self::digest(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_pair_is_self_consistent() {
        let issued = TokenIssuer::new().issue();
        assert_eq!(TokenIssuer::digest(&issued.token), issued.hashed_token);
        assert_eq!(issued.token.len(), TOKEN_BYTES * 2);
        assert_ne!(issued.token, issued.hashed_token);
    }

    #[test]
    fn test_successive_tokens_differ() {
        let issuer = TokenIssuer::new();
        let first = issuer.issue();
        let second = issuer.issue();
        assert_ne!(first.token, second.token);
        assert_ne!(first.hashed_token, second.hashed_token);
    }

    #[test]
    fn test_matches() {
        let issuer = TokenIssuer::new();
        let issued = issuer.issue();
        assert!(issuer.matches(&issued.token, &issued.hashed_token));
        assert!(!issuer.matches(&issuer.issue().token, &issued.hashed_token));
        assert!(!issuer.matches(&issued.token, "garbage"));
        // Presenting the stored digest itself must not work.
        assert!(!issuer.matches(&issued.hashed_token, &issued.hashed_token));
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let issued = TokenIssuer::new().issue();
        let rendered = format!("{issued:?}");
        assert!(!rendered.contains(&issued.token));
    }
}
