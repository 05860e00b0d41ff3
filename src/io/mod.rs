//! Input/output helpers.
//!
//! - weight parsing + CSV ingest (`ingest`)
//! - per-class results CSV (`export`)
//! - analysis JSON read/write (`analysis`)

pub mod analysis;
pub mod export;
pub mod ingest;

pub use analysis::*;
pub use export::*;
pub use ingest::*;
