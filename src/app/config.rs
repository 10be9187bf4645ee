//! Application configuration
//!
//! Combines command-line verbosity with the loaded [`SeqkitConfig`].

use crate::config::SeqkitConfig;
use crate::error::Result;
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings from the config file and environment
    pub settings: SeqkitConfig,
}

impl AppConfig {
    /// Load settings and attach the verbosity level
    pub fn load(verbose: u8, config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            verbose,
            settings: SeqkitConfig::load(config_path)?,
        })
    }

    pub fn with_settings(mut self, settings: SeqkitConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Get the log filter, preferring an explicit `log_level` setting when
    /// no `-v` flag was given
    pub fn log_level(&self) -> String {
        match (self.verbose, &self.settings.log_level) {
            (0, Some(level)) => level.clone(),
            (0, None) => "info".to_string(),
            (1, _) => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
