//! Configuration for the seqkit binary
//!
//! Settings come from a TOML file (explicit path or the platform config
//! directory) and are then overridden by `SEQKIT_*` environment variables.

use crate::error::{ErrorCode, Result, SeqError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_SAMPLE_SIZE: usize = 100_000;

/// Location of the per-user config file, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "seqkit", "seqkit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqkitConfig {
    /// Tracing filter directive, e.g. `debug` or `seqkit=trace`
    pub log_level: Option<String>,
    /// Chunk size used when `seqkit chunk` is given no `--size`
    pub default_chunk_size: usize,
    /// Seed for `seqkit shuffle` when no `--seed` is given
    pub shuffle_seed: Option<u64>,
    pub measure: MeasureConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Length of the generated sequence `seqkit measure` times against
    pub sample_size: usize,
}

impl Default for SeqkitConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            default_chunk_size: DEFAULT_CHUNK_SIZE,
            shuffle_seed: None,
            measure: MeasureConfig::default(),
        }
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SeqkitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            SeqError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "invalid config TOML")
                .with_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeqError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("cannot read {}", path.display()),
            )
            .with_source(e)
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content).map_err(|e| e.with_context(path.display()))
    }

    /// Load from `explicit` if given, otherwise from the default location
    /// when that file exists, otherwise defaults. Environment overrides are
    /// applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_path(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_path(&path)?,
                None => Self::default(),
            },
        };

        config.merge_env_vars()?;
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `SEQKIT_LOG_LEVEL`, `SEQKIT_CHUNK_SIZE` and
    /// `SEQKIT_SHUFFLE_SEED` as returned by `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SEQKIT_LOG_LEVEL") {
            self.log_level = Some(level);
        }

        if let Some(size) = lookup("SEQKIT_CHUNK_SIZE") {
            self.default_chunk_size = parse_env("SEQKIT_CHUNK_SIZE", &size)?;
        }

        if let Some(seed) = lookup("SEQKIT_SHUFFLE_SEED") {
            self.shuffle_seed = Some(parse_env("SEQKIT_SHUFFLE_SEED", &seed)?);
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_chunk_size == 0 {
            return Err(SeqError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "default_chunk_size must be a positive integer",
            ));
        }

        if self.measure.sample_size == 0 {
            return Err(SeqError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "measure.sample_size must be a positive integer",
            ));
        }

        Ok(())
    }
}

fn parse_env<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim().parse::<T>().map_err(|e| {
        SeqError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("{} has invalid value '{}'", name, raw),
        )
        .with_source(e)
    })
}

#[cfg(test)]
mod tests;
