//! Dot-separated field paths into JSON values

use crate::error::{ErrorCode, Result, SeqError};
use serde_json::Value;
use std::fmt;

/// A compiled field path such as `user.address.city` or `tags.0`
///
/// Numeric segments index into arrays; every other segment looks up an
/// object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    expression: String,
    parts: Vec<String>,
}

impl FieldPath {
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(SeqError::invalid_argument_with_code(
                ErrorCode::INVALID_KEY,
                "key path must not be empty",
                "key",
            ));
        }

        let parts: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(SeqError::invalid_argument_with_code(
                ErrorCode::INVALID_KEY,
                format!("key path '{}' contains an empty segment", trimmed),
                "key",
            ));
        }

        Ok(Self {
            expression: trimmed.to_string(),
            parts,
        })
    }

    /// Resolve the path against `item`, or `None` if any segment is missing
    pub fn select<'a>(&self, item: &'a Value) -> Option<&'a Value> {
        self.parts.iter().try_fold(item, |current, part| match current {
            Value::Object(map) => map.get(part),
            Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
