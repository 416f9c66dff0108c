//! Constant-time password verification against a stored credential.

use crate::crypto;

use super::hasher::CredentialHasher;

/// Checks a plaintext password against a stored hash and salt.
#[derive(Debug, Clone, Default)]
pub struct PasswordVerifier {
    hasher: CredentialHasher,
}

impl PasswordVerifier {
    /// Creates a verifier backed by `hasher`.
    pub fn new(hasher: CredentialHasher) -> Self {
        Self { hasher }
    }

    /// Returns `true` only if `password` hashes to `stored_hash` under `stored_salt`.
    ///
    /// A stored hash that is not valid hex, or not a full digest, never matches.
    pub fn verify(&self, password: &str, stored_hash: &str, stored_salt: &str) -> bool {
        let recomputed = self.hasher.hash(password, Some(stored_salt));
        crypto::hex_digests_match(stored_hash, &recomputed.hash)
    }
}
