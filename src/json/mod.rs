//! Dynamically typed front end over `serde_json::Value`
//!
//! The typed API in [`crate::core`] gets its argument checks from the
//! compiler. Values arriving as JSON do not, so every function here checks
//! that sequences are arrays and sizes are positive integers before doing
//! any work. Elements are compared by their canonical JSON text.

mod field_path;

pub use field_path::FieldPath;

use crate::abstractions::RandomSource;
use crate::core;
use crate::error::{ErrorCode, Result, SeqError};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Parse `text` as JSON, naming `argument` in the error on failure
pub fn parse_value(text: &str, argument: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        SeqError::invalid_argument_with_code(
            ErrorCode::INVALID_JSON,
            format!("'{}' is not valid JSON: {}", argument, e),
            argument,
        )
    })
}

/// Parse `text` as JSON and require it to be an array
pub fn parse_sequence(text: &str, argument: &str) -> Result<Vec<Value>> {
    match parse_value(text, argument)? {
        Value::Array(items) => Ok(items),
        _ => Err(SeqError::not_a_sequence(argument)),
    }
}

/// Borrow the elements of `value`, failing if it is not an array
pub fn as_sequence<'a>(value: &'a Value, argument: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SeqError::not_a_sequence(argument))
}

/// Interpret `value` as a positive integer.
///
/// Integral floats such as `3.0` are accepted, and integers too large for
/// `usize` saturate to `usize::MAX`. Zero, negatives, fractions and
/// non-numbers are rejected.
pub fn positive_size(value: &Value, argument: &str) -> Result<usize> {
    let size = match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => Some(usize::try_from(u).unwrap_or(usize::MAX)),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 1.0)
                .map(|f| if f >= usize::MAX as f64 { usize::MAX } else { f as usize }),
        },
        _ => None,
    };

    match size {
        Some(s) if s > 0 => Ok(s),
        _ => Err(SeqError::not_a_positive_integer(argument, value)),
    }
}

/// Canonical text of a JSON value, used as its identity
pub fn canonical_key(value: &Value) -> String {
    value.to_string()
}

/// Keep the first element for each distinct value at `key_path`.
///
/// Elements missing the field share the key `null`.
pub fn unique_by_field(input: &Value, key_path: &str) -> Result<Value> {
    let items = as_sequence(input, "array")?;
    let path = FieldPath::parse(key_path)?;

    let unique = core::filter_unique_by_key(items, |item| {
        path.select(item)
            .map(canonical_key)
            .unwrap_or_else(|| "null".to_string())
    });
    debug!("Unique by '{}': {} of {} items", path, unique.len(), items.len());
    Ok(Value::Array(unique))
}

/// Chunk a JSON array; `size` must be a positive integer
pub fn chunk_value(input: &Value, size: &Value) -> Result<Value> {
    let items = as_sequence(input, "array")?;
    let size = positive_size(size, "size")?;

    let chunks = core::chunk(items, size)?;
    Ok(Value::Array(chunks.into_iter().map(Value::Array).collect()))
}

/// Shuffle a JSON array with the given random source
pub fn shuffle_value<R: RandomSource + ?Sized>(input: &Value, rng: &mut R) -> Result<Value> {
    let items = as_sequence(input, "array")?;
    Ok(Value::Array(core::shuffle_with(items, rng)))
}

/// Elements of `second` present in `first`, in `second`'s order
pub fn intersect_values(first: &Value, second: &Value) -> Result<Value> {
    let first = as_sequence(first, "first")?;
    let second = as_sequence(second, "second")?;

    let membership: HashSet<String> = first.iter().map(canonical_key).collect();
    let result: Vec<Value> = second
        .iter()
        .filter(|item| membership.contains(&canonical_key(item)))
        .cloned()
        .collect();
    Ok(Value::Array(result))
}

/// Distinct elements of `first` then `second`, in first-seen order
pub fn union_values(first: &Value, second: &Value) -> Result<Value> {
    let first = as_sequence(first, "first")?;
    let second = as_sequence(second, "second")?;

    let combined: Vec<Value> = first.iter().chain(second.iter()).cloned().collect();
    Ok(Value::Array(core::into_unique_by_key(combined, canonical_key)))
}
