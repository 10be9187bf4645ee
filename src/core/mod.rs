//! Core sequence operations
//!
//! Every function here borrows or consumes its input and returns a newly
//! allocated result. None of them mutate caller-owned data or perform I/O.
//! The shuffler draws from an injected [`crate::abstractions::RandomSource`];
//! everything else is a pure function of its arguments.

pub mod chunk;
pub mod set_ops;
pub mod shuffle;
pub mod unique;

pub use chunk::{chunk, chunk_count};
pub use set_ops::{intersect, union};
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with};
pub use unique::{
    count_duplicates_by_key, filter_unique_by_key, filter_unique_by_key_eq, into_unique_by_key,
};
