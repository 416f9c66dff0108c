//! Signed session cookies: minting at login and verification on every request.

pub mod claims;
pub mod cookie;
pub mod issuer;
pub mod reader;
pub mod secret;

pub use claims::SessionClaim;
pub use cookie::{CookieSource, SECURE_COOKIE_PREFIX, resolve_cookie_name};
pub use issuer::{IssuedSession, SessionIssuer};
pub use reader::{SessionReader, SessionRejection};
pub use secret::SessionSecret;
