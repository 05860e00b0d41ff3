//! Shared domain types and the fixed sieve catalog.

pub mod types;

pub use types::*;
