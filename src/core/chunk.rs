//! Fixed-size chunking

use crate::error::{Result, SeqError};
use tracing::debug;

/// Split `items` into contiguous chunks of `size` elements.
///
/// Every chunk holds exactly `size` elements except possibly the last,
/// which holds the remainder. An empty input yields no chunks.
///
/// # Errors
/// Returns `InvalidArgument` when `size` is zero. Validation happens before
/// the input is inspected, so an empty input with a zero size still fails.
///
/// # Examples
/// ```
/// use seqkit::core::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5, 6, 7, 8], 3).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    validate_size(size)?;

    let chunks: Vec<Vec<T>> = items.chunks(size).map(<[T]>::to_vec).collect();
    debug!(
        "Split {} items into {} chunks of size {}",
        items.len(),
        chunks.len(),
        size
    );
    Ok(chunks)
}

/// Number of chunks [`chunk`] produces for `len` items, i.e. `ceil(len / size)`.
pub fn chunk_count(len: usize, size: usize) -> Result<usize> {
    validate_size(size)?;
    Ok(len.div_ceil(size))
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(SeqError::not_a_positive_integer("size", size));
    }
    Ok(())
}
