//! Digest, randomness, and comparison helpers shared by the auth modules.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Returns `len` bytes from the thread-local CSPRNG, hex-encoded.
pub(crate) fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 over the concatenation of `parts`, hex-encoded.
pub(crate) fn sha256_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

/// Compares two hex-encoded digests in constant time.
///
/// Undecodable input on either side is a mismatch.
pub(crate) fn hex_digests_match(expected: &str, actual: &str) -> bool {
    match (hex::decode(expected), hex::decode(actual)) {
        (Ok(expected), Ok(actual)) => constant_time_eq(&expected, &actual),
        _ => false,
    }
}

/// Byte comparison whose running time does not depend on where the inputs differ.
///
/// Inputs of different length never match.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
