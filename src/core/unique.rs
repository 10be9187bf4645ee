//! Unique-by-key filtering
//!
//! Keeps the first element seen for each derived key and drops the rest,
//! preserving the relative order of the survivors.

use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Keep the first element for each distinct key, in original order.
///
/// Uses a `HashSet` of seen keys, so the key type must be `Eq + Hash`.
/// Keys that only implement `PartialEq` can use [`filter_unique_by_key_eq`].
///
/// # Examples
/// ```
/// use seqkit::core::filter_unique_by_key;
///
/// let people = vec![("Tomas", 1), ("Ilya", 2), ("Tomas", 3)];
/// let unique = filter_unique_by_key(&people, |p| p.0);
/// assert_eq!(unique, vec![("Tomas", 1), ("Ilya", 2)]);
/// ```
pub fn filter_unique_by_key<T, K, F>(items: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    let unique: Vec<T> = items
        .iter()
        .filter(|item| seen.insert(key_fn(*item)))
        .cloned()
        .collect();

    debug!("Deduplicated {} items to {}", items.len(), unique.len());
    unique
}

/// Consuming variant of [`filter_unique_by_key`] that moves elements
/// instead of cloning them.
pub fn into_unique_by_key<T, K, F>(items: Vec<T>, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let total = items.len();
    let mut seen = HashSet::with_capacity(total);
    let mut unique = Vec::new();

    for item in items {
        if seen.insert(key_fn(&item)) {
            unique.push(item);
        }
    }

    debug!("Deduplicated {} items to {}", total, unique.len());
    unique
}

/// Unique-by-key for keys that only support equality.
///
/// Seen keys live in a plain `Vec`, so this is quadratic in the number of
/// distinct keys. Prefer [`filter_unique_by_key`] when the key is hashable.
pub fn filter_unique_by_key_eq<T, K, F>(items: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen: Vec<K> = Vec::new();
    let mut unique = Vec::new();

    for item in items {
        let key = key_fn(item);
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(item.clone());
        }
    }

    debug!("Deduplicated {} items to {}", items.len(), unique.len());
    unique
}

/// Number of elements [`filter_unique_by_key`] would drop.
pub fn count_duplicates_by_key<T, K, F>(items: &[T], mut key_fn: F) -> usize
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| !seen.insert(key_fn(*item))).count()
}
