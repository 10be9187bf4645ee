//! Random source abstraction
//!
//! Provides a trait-based abstraction over uniform index selection so the
//! shuffler can run against the thread-local generator, a seeded generator,
//! or a scripted sequence of draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Trait for uniform random index selection
pub trait RandomSource {
    /// Draw a uniformly distributed index in `0..=upper`
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        (**self).index_up_to(upper)
    }
}

/// Thread-local generator from `rand`
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Reproducible generator seeded from a `u64`
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Mock random source that replays a fixed list of draws
///
/// Each draw is clamped to `upper`, so any script is valid for any request.
/// The script cycles once exhausted. An empty script always
/// returns `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<usize>,
    position: usize,
    /// Track requested upper bounds for verification
    pub requested: Vec<usize>,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<usize>) -> Self {
        Self {
            draws,
            position: 0,
            requested: Vec::new(),
        }
    }

    /// A source that always picks the highest allowed index, which makes
    /// every Fisher-Yates swap a no-op
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }
}

impl RandomSource for ScriptedRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.requested.push(upper);
        if self.draws.is_empty() {
            return 0;
        }

        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw.min(upper)
    }
}
