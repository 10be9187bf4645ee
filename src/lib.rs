//! # seqkit
//!
//! Small, dependable helpers for working with sequences: keep the first
//! element per key, split into chunks, shuffle, intersect, unite, and time
//! another function over a sequence.
//!
//! ```
//! use seqkit::core::{chunk, filter_unique_by_key, intersect, union};
//!
//! let people = [(1, "Tomas"), (2, "Ilya"), (1, "Tomas again")];
//! assert_eq!(filter_unique_by_key(&people, |p| p.0), vec![(1, "Tomas"), (2, "Ilya")]);
//!
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(intersect(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
//! assert_eq!(union(&[1, 2, 3], &[2, 3, 4]), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Modules
//!
//! - `core` - The sequence operations themselves
//! - `abstractions` - Injectable random source and clock
//! - `metrics` - Timing a callable over a sequence
//! - `json` - Runtime-validated variants over `serde_json::Value`
//! - `error` - Error type and error codes
//! - `config` - TOML configuration with environment overrides
//! - `app` - Logging and error reporting for the binary
//! - `cli` - Command-line argument parsing and command handlers
pub mod abstractions;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod json;
pub mod metrics;

pub use error::{Result, SeqError};
