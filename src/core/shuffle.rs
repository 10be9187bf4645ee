//! Fisher-Yates shuffling over an injectable random source

use crate::abstractions::{RandomSource, SeededRandom, ThreadRandom};
use tracing::trace;

/// Return a uniformly shuffled copy of `items` using the thread-local
/// generator. The input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut ThreadRandom::new())
}

/// Shuffle with a generator seeded from `seed`. Equal seeds produce equal
/// permutations.
pub fn shuffle_seeded<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    shuffle_with(items, &mut SeededRandom::new(seed))
}

/// Fisher-Yates over a private copy of `items`.
///
/// Walks `i` from the last index down to 1, drawing `j` uniformly from
/// `0..=i` and swapping positions `i` and `j`.
///
/// # Examples
/// ```
/// use seqkit::abstractions::SeededRandom;
/// use seqkit::core::shuffle_with;
///
/// let input = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle_with(&input, &mut SeededRandom::new(7));
/// shuffled.sort();
/// assert_eq!(shuffled, input);
/// ```
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_up_to(i);
        shuffled.swap(i, j);
    }

    trace!("Shuffled {} items", shuffled.len());
    shuffled
}
