//! Opaque one-time tokens for password reset and email verification.

pub mod expiry;
pub mod issuer;

pub use expiry::{DEFAULT_TOKEN_LIFETIME_HOURS, TokenLifetimes, create_expiration_date};
pub use issuer::{IssuedToken, TOKEN_BYTES, TokenIssuer};
