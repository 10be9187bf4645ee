use super::*;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn test_defaults() {
    let config = SeqkitConfig::default();
    assert_eq!(config.default_chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.measure.sample_size, DEFAULT_SAMPLE_SIZE);
    assert_eq!(config.shuffle_seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_partial_toml_fills_defaults() {
    let config = SeqkitConfig::from_toml_str("shuffle_seed = 42\n").unwrap();
    assert_eq!(config.shuffle_seed, Some(42));
    assert_eq!(config.default_chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_parse_full_toml() {
    let content = r#"
log_level = "debug"
default_chunk_size = 3

[measure]
sample_size = 500
"#;
    let config = SeqkitConfig::from_toml_str(content).unwrap();
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(config.default_chunk_size, 3);
    assert_eq!(config.measure.sample_size, 500);
}

#[test]
fn test_parse_rejects_zero_chunk_size() {
    let err = SeqkitConfig::from_toml_str("default_chunk_size = 0").unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
}

#[test]
fn test_parse_rejects_malformed_toml() {
    let err = SeqkitConfig::from_toml_str("default_chunk_size = [").unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "default_chunk_size = 7").unwrap();

    let config = SeqkitConfig::from_path(file.path()).unwrap();
    assert_eq!(config.default_chunk_size, 7);
}

#[test]
fn test_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = SeqkitConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
}

#[test]
fn test_env_overrides() {
    let mut config = SeqkitConfig::default();
    config
        .merge_env_with(env_of(&[
            ("SEQKIT_LOG_LEVEL", "trace"),
            ("SEQKIT_CHUNK_SIZE", " 25 "),
            ("SEQKIT_SHUFFLE_SEED", "99"),
        ]))
        .unwrap();

    assert_eq!(config.log_level.as_deref(), Some("trace"));
    assert_eq!(config.default_chunk_size, 25);
    assert_eq!(config.shuffle_seed, Some(99));
}

#[test]
fn test_env_override_invalid_number() {
    let mut config = SeqkitConfig::default();
    let err = config
        .merge_env_with(env_of(&[("SEQKIT_CHUNK_SIZE", "lots")]))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
}

#[test]
fn test_env_override_zero_chunk_size() {
    let mut config = SeqkitConfig::default();
    assert!(config
        .merge_env_with(env_of(&[("SEQKIT_CHUNK_SIZE", "0")]))
        .is_err());
}

#[test]
fn test_no_env_leaves_config_unchanged() {
    let mut config = SeqkitConfig::default();
    config.merge_env_with(|_| None).unwrap();
    assert_eq!(config, SeqkitConfig::default());
}
