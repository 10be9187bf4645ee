//! Intersection and union over sequences
//!
//! Both operations use hash-set membership. Intersection follows the order
//! of the second sequence and keeps its duplicates; union is fully
//! deduplicated in first-seen order.

use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Elements of `second` that also appear in `first`, in `second`'s order.
///
/// Duplicates in `second` are kept when they match.
///
/// # Examples
/// ```
/// use seqkit::core::intersect;
///
/// assert_eq!(intersect(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]), vec![3, 4, 5]);
/// assert_eq!(intersect(&[1, 2], &[2, 2, 3]), vec![2, 2]);
/// ```
pub fn intersect<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let membership: HashSet<&T> = first.iter().collect();
    let result: Vec<T> = second
        .iter()
        .filter(|item| membership.contains(*item))
        .cloned()
        .collect();

    debug!(
        "Intersected {} and {} items into {}",
        first.len(),
        second.len(),
        result.len()
    );
    result
}

/// Every distinct element of `first` then `second`, each exactly once.
///
/// # Examples
/// ```
/// use seqkit::core::union;
///
/// assert_eq!(
///     union(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]),
///     vec![1, 2, 3, 4, 5, 6, 7]
/// );
/// ```
pub fn union<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(first.len() + second.len());
    let result: Vec<T> = first
        .iter()
        .chain(second.iter())
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();

    debug!(
        "United {} and {} items into {}",
        first.len(),
        second.len(),
        result.len()
    );
    result
}
