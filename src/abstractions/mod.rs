//! Abstraction layers for non-deterministic dependencies
//!
//! This module provides trait-based abstractions for randomness and
//! wall-clock time so that shuffling and timing can be tested with
//! seeded or scripted inputs.

pub mod clock;
pub mod random;

pub use clock::{Clock, MockClock, SystemClock};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
