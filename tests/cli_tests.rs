//! Integration tests for the CLI interface
//!
//! Runs the `seqkit` binary end to end and checks its JSON output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn seqkit() -> Command {
    let mut cmd = Command::cargo_bin("seqkit").unwrap();
    for var in ["SEQKIT_LOG_LEVEL", "SEQKIT_CHUNK_SIZE", "SEQKIT_SHUFFLE_SEED"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help_flag() {
    seqkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    seqkit()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_unique_command() {
    seqkit()
        .args(["unique", r#"[{"id":1},{"id":2},{"id":1}]"#, "--key", "id"])
        .assert()
        .success()
        .stdout("[{\"id\":1},{\"id\":2}]\n");
}

#[test]
fn test_chunk_command() {
    seqkit()
        .args(["chunk", "[1,2,3,4,5,6,7,8]", "--size", "3"])
        .assert()
        .success()
        .stdout("[[1,2,3],[4,5,6],[7,8]]\n");
}

#[test]
fn test_chunk_rejects_non_positive_size() {
    seqkit()
        .args(["chunk", "[1,2,3]", "--size", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be a positive integer"));
}

#[test]
fn test_chunk_rejects_non_array() {
    seqkit()
        .args(["chunk", "{\"a\":1}", "--size", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an array"));
}

#[test]
fn test_chunk_uses_configured_default_size() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("seqkit.toml");
    fs::write(&config_path, "default_chunk_size = 2\n").unwrap();

    seqkit()
        .arg("--config")
        .arg(&config_path)
        .args(["chunk", "[1,2,3]"])
        .assert()
        .success()
        .stdout("[[1,2],[3]]\n");
}

#[test]
fn test_chunk_size_from_environment() {
    seqkit()
        .env("SEQKIT_CHUNK_SIZE", "4")
        .args(["chunk", "[1,2,3,4,5]"])
        .assert()
        .success()
        .stdout("[[1,2,3,4],[5]]\n");
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("seqkit.toml");
    fs::write(&config_path, "default_chunk_size = 0\n").unwrap();

    seqkit()
        .arg("--config")
        .arg(&config_path)
        .args(["chunk", "[1,2,3]"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_shuffle_seeded_is_reproducible() {
    let first = seqkit()
        .args(["shuffle", "[1,2,3,4,5]", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = seqkit()
        .args(["shuffle", "[1,2,3,4,5]", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
    let mut values: Vec<i64> = serde_json::from_slice(&first).unwrap();
    values.sort();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_intersect_and_union_commands() {
    seqkit()
        .args(["intersect", "[1,2,3,4,5]", "[3,4,5,6,7]"])
        .assert()
        .success()
        .stdout("[3,4,5]\n");

    seqkit()
        .args(["union", "[1,2,3,4,5]", "[3,4,5,6,7]"])
        .assert()
        .success()
        .stdout("[1,2,3,4,5,6,7]\n");
}

#[test]
fn test_measure_command_prints_report() {
    seqkit()
        .args(["measure", "--op", "chunk", "-n", "10000", "--chunk-size", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"chunk\""))
        .stdout(predicate::str::contains("\"item_count\":10000"));
}

#[test]
fn test_bad_json_argument() {
    seqkit()
        .args(["union", "[1,2", "[3]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"));
}
