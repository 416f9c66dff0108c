//! Store traits implemented outside `folio-core`.

pub mod store;

pub use store::{TokenStore, UserStore};
