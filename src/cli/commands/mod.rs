//! Command implementations
//!
//! Each command takes raw CLI strings and returns the JSON text to print.

mod measure;
mod sequence;

pub use measure::run_measure;
pub use sequence::{run_chunk, run_intersect, run_shuffle, run_union, run_unique};
