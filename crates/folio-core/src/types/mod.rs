//! Records shared between the auth layer and the stores.

pub mod token;
pub mod user;

pub use token::{StoredToken, TokenKind};
pub use user::{SessionIdentity, User};
