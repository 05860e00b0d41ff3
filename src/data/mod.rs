//! Sample data: the bundled demo weights and the synthetic generator.

pub mod sample;

pub use sample::*;
