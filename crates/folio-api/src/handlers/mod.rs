//! Route handlers.

pub mod auth;
pub mod health;
pub mod password;
pub mod verification;
