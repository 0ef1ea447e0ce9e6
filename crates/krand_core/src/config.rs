//! Entropy configuration management
//!
//! Handles loading the entropy mode and seed from TOML files, environment
//! variables, and command-line overrides.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::entropy::EntropyMode;

/// Environment variable selecting the entropy mode.
pub const ENV_MODE: &str = "KRAND_MODE";
/// Environment variable holding a `u64` seed.
pub const ENV_SEED: &str = "KRAND_SEED";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown entropy mode name.
    #[error("Invalid entropy mode: {0}. Must be one of: standard, secure")]
    InvalidMode(String),

    /// Seed that does not parse as a `u64`.
    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    /// A seed was supplied together with secure mode.
    #[error("A seed cannot be used with secure mode")]
    SeedWithSecureMode,

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Entropy source configuration.
///
/// # Examples
///
/// ```
/// use krand_core::config::EntropyConfig;
/// use krand_core::entropy::EntropyMode;
///
/// let config = EntropyConfig::from_toml_str("mode = \"standard\"\nseed = 42").unwrap();
/// assert_eq!(config.mode, EntropyMode::Standard);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntropyConfig {
    /// Standard or secure generator
    pub mode: EntropyMode,
    /// Fixed seed for reproducible standard-mode sequences
    pub seed: Option<u64>,
}

impl EntropyConfig {
    /// Create a new EntropyConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides fields for every variable `lookup` returns.
    fn apply_lookup<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = EntropyMode::from_str(&mode)?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed.trim();
            self.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.to_string()))?,
            );
        }

        Ok(())
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EntropyConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == EntropyMode::Secure && self.seed.is_some() {
            return Err(ConfigError::SeedWithSecureMode);
        }

        Ok(())
    }

    /// Merge with command-line overrides (overrides take precedence)
    pub fn merge_with_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
            self.mode = EntropyMode::Standard;
        }
        if overrides.secure {
            self.mode = EntropyMode::Secure;
            self.seed = None;
        }
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override; selects standard mode
    pub seed: Option<u64>,
    /// Force secure mode
    pub secure: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(overrides: &ConfigOverrides) -> Result<EntropyConfig, ConfigError> {
    build_config_with(overrides, |key| std::env::var(key).ok())
}

fn build_config_with<F>(
    overrides: &ConfigOverrides,
    lookup: F,
) -> Result<EntropyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &overrides.config_file {
        EntropyConfig::from_file(config_path)?
    } else {
        EntropyConfig::default()
    };

    config.apply_lookup(lookup)?;
    config.merge_with_overrides(overrides);

    // Final validation
    config.validate()?;

    Ok(config)
}
