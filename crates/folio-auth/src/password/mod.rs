//! Password credentials: hashing, verification, and policy enforcement.

pub mod hasher;
pub mod validator;
pub mod verifier;

pub use hasher::{Credential, CredentialHasher};
pub use validator::PasswordValidator;
pub use verifier::PasswordVerifier;
