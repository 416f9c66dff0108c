//! # folio-auth
//!
//! Credential and session primitives for Folio.
//!
//! ## Modules
//!
//! - `password` — salted SHA-256 credential hashing, constant-time verification, and policy
//! - `token` — opaque reset/verification tokens and their expiry
//! - `session` — signed session cookies: minting and reading
//!
//! Everything here is synchronous and free of I/O. Verification answers
//! with `bool` or [`SessionRejection`], never with an error that would tell
//! a caller *why* a credential was rejected.

mod crypto;

pub mod password;
pub mod session;
pub mod token;

pub use password::{Credential, CredentialHasher, PasswordValidator, PasswordVerifier};
pub use session::{
    CookieSource, IssuedSession, SessionClaim, SessionIssuer, SessionReader, SessionRejection,
    SessionSecret,
};
pub use token::{IssuedToken, TokenIssuer, TokenLifetimes, create_expiration_date};
