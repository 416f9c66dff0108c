//! Salted SHA-256 password hashing.

use serde::{Deserialize, Serialize};

use crate::crypto;

/// Number of random bytes in a generated salt.
pub const SALT_BYTES: usize = 16;

/// A stored password credential: digest and the salt it was computed with.
///
/// Both fields are lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// `SHA-256(password ‖ salt)`, hex-encoded.
    pub hash: String,
    /// Per-credential salt, hex-encoded.
    pub salt: String,
}

/// Derives salted password digests.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Creates a new credential hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hashes `password` with `salt`, generating a fresh salt when none is given.
    ///
    /// The salt's hex text is appended to the password before digesting, so
    /// the same password and salt always produce the same hash. Callers
    /// validate the password before calling.
    pub fn hash(&self, password: &str, salt: Option<&str>) -> Credential {
        let salt = match salt {
            Some(salt) => salt.to_string(),
            None => Self::generate_salt(),
        };
        let hash = crypto::sha256_hex(&[password.as_bytes(), salt.as_bytes()]);
        Credential { hash, salt }
    }

    /// Generates [`SALT_BYTES`] random bytes, hex-encoded.
    pub fn generate_salt() -> String {
        crypto::random_hex(SALT_BYTES)
    }
}
