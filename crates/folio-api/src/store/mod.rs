//! Store implementations.

pub mod memory;

pub use memory::{MemoryTokenStore, MemoryUserStore};
