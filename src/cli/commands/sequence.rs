//! Sequence commands over JSON arrays

use crate::abstractions::{SeededRandom, ThreadRandom};
use crate::config::SeqkitConfig;
use crate::json;
use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a CLI argument that must hold a JSON array
fn parse_array_arg(raw: &str, argument: &str) -> Result<Value> {
    Ok(Value::Array(json::parse_sequence(raw, argument)?))
}

fn render(value: &Value) -> Result<String> {
    serde_json::to_string(value).context("Failed to render result")
}

pub fn run_unique(array: &str, key: &str) -> Result<String> {
    let input = parse_array_arg(array, "array")?;
    render(&json::unique_by_field(&input, key)?)
}

pub fn run_chunk(array: &str, size: Option<&str>, settings: &SeqkitConfig) -> Result<String> {
    let input = parse_array_arg(array, "array")?;
    let size = match size {
        Some(raw) => json::parse_value(raw, "size")?,
        None => Value::from(settings.default_chunk_size),
    };
    render(&json::chunk_value(&input, &size)?)
}

pub fn run_shuffle(array: &str, seed: Option<u64>) -> Result<String> {
    let input = parse_array_arg(array, "array")?;
    let shuffled = match seed {
        Some(seed) => json::shuffle_value(&input, &mut SeededRandom::new(seed))?,
        None => json::shuffle_value(&input, &mut ThreadRandom::new())?,
    };
    render(&shuffled)
}

pub fn run_intersect(first: &str, second: &str) -> Result<String> {
    let first = parse_array_arg(first, "first")?;
    let second = parse_array_arg(second, "second")?;
    render(&json::intersect_values(&first, &second)?)
}

pub fn run_union(first: &str, second: &str) -> Result<String> {
    let first = parse_array_arg(first, "first")?;
    let second = parse_array_arg(second, "second")?;
    render(&json::union_values(&first, &second)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, SeqError};

    fn seq_code(err: &anyhow::Error) -> Option<u16> {
        err.downcast_ref::<SeqError>().map(SeqError::code)
    }

    #[test]
    fn test_run_unique() {
        let out = run_unique(r#"[{"id":1},{"id":2},{"id":1}]"#, "id").unwrap();
        assert_eq!(out, r#"[{"id":1},{"id":2}]"#);
    }

    #[test]
    fn test_run_chunk_explicit_and_default_size() {
        let settings = SeqkitConfig {
            default_chunk_size: 2,
            ..SeqkitConfig::default()
        };
        assert_eq!(
            run_chunk("[1,2,3,4,5,6,7,8]", Some("3"), &settings).unwrap(),
            "[[1,2,3],[4,5,6],[7,8]]"
        );
        assert_eq!(
            run_chunk("[1,2,3]", None, &settings).unwrap(),
            "[[1,2],[3]]"
        );
    }

    #[test]
    fn test_run_chunk_rejects_bad_size() {
        let settings = SeqkitConfig::default();
        for raw in ["0", "-3", "2.5", "\"3\""] {
            let err = run_chunk("[1,2]", Some(raw), &settings).unwrap_err();
            assert_eq!(
                seq_code(&err),
                Some(ErrorCode::NOT_A_POSITIVE_INTEGER),
                "size {}",
                raw
            );
        }
    }

    #[test]
    fn test_run_shuffle_seeded() {
        let first = run_shuffle("[1,2,3,4,5]", Some(7)).unwrap();
        let second = run_shuffle("[1,2,3,4,5]", Some(7)).unwrap();
        assert_eq!(first, second);

        let mut values: Vec<i64> = serde_json::from_str(&first).unwrap();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_run_set_ops() {
        assert_eq!(run_intersect("[1,2,3,4,5]", "[3,4,5,6,7]").unwrap(), "[3,4,5]");
        assert_eq!(
            run_union("[1,2,3,4,5]", "[3,4,5,6,7]").unwrap(),
            "[1,2,3,4,5,6,7]"
        );
    }

    #[test]
    fn test_invalid_json_argument() {
        let err = run_union("[1,2", "[]").unwrap_err();
        assert_eq!(seq_code(&err), Some(ErrorCode::INVALID_JSON));
    }

    #[test]
    fn test_invalid_json_size() {
        let err = run_chunk("[1,2]", Some("three"), &SeqkitConfig::default()).unwrap_err();
        assert_eq!(seq_code(&err), Some(ErrorCode::INVALID_JSON));
    }

    #[test]
    fn test_non_array_argument() {
        let err = run_intersect("[1]", "{}").unwrap_err();
        assert_eq!(seq_code(&err), Some(ErrorCode::NOT_A_SEQUENCE));
    }
}
