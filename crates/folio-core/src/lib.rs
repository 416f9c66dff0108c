//! # folio-core
//!
//! Core crate for Folio. Contains configuration schemas, the user and
//! token records shared by the auth and API layers, the store traits
//! that stand in for the document database, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
