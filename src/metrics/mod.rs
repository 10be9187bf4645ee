//! Timing of sequence operations
//!
//! A stopwatch runs a callable once over a sequence and reports how long the
//! call took, measured with an injectable [`crate::abstractions::Clock`].

pub mod performance;

pub use performance::{
    as_millis_f64, measure, measure_returning, measure_with, Stopwatch, TimingReport,
};
