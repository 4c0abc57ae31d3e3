//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.palcase.toml` in the working directory
//! 4. `~/.config/palcase/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    DEFAULT_CASE_COUNT, DEFAULT_MAX_VALUE, ENV_CASE_COUNT, ENV_DIR, ENV_MAX_VALUE, ENV_SEED,
    MAX_VALUE_LIMIT,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub run: RunConfig,
}

/// Settings for one generator/checker run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Number of cases, indexed `0..case_count`.
    pub case_count: usize,
    /// Exclusive upper bound of the random base value.
    pub max_value: u64,
    /// Fixed RNG seed for reproducible runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Directory the case files are written to.
    pub dir: PathBuf,
}

/// One config file as written on disk. Only keys present in the file are
/// `Some`, so an explicit value wins even when it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub run: RunLayer,
}

/// The `[run]` table of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunLayer {
    pub case_count: Option<usize>,
    pub max_value: Option<u64>,
    pub seed: Option<u64>,
    pub dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            case_count: DEFAULT_CASE_COUNT,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the local config in `work_dir`, then
    /// applies environment variable overrides. CLI flags are applied by
    /// the caller afterwards.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config; every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        let run = layer.run;
        if let Some(case_count) = run.case_count {
            self.run.case_count = case_count;
        }
        if let Some(max_value) = run.max_value {
            self.run.max_value = max_value;
        }
        if let Some(seed) = run.seed {
            self.run.seed = Some(seed);
        }
        if let Some(dir) = run.dir {
            self.run.dir = dir;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(count) = env.parsed(ENV_CASE_COUNT) {
            self.run.case_count = count;
        }
        if let Some(max) = env.parsed(ENV_MAX_VALUE) {
            self.run.max_value = max;
        }
        if let Some(seed) = env.parsed(ENV_SEED) {
            self.run.seed = Some(seed);
        }
        if let Ok(dir) = env.var(ENV_DIR) {
            if !dir.is_empty() {
                self.run.dir = PathBuf::from(dir);
            }
        }
    }

    /// Reject settings the generator cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.max_value == 0 {
            return Err(ConfigError::Invalid {
                field: "max_value",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.run.max_value > MAX_VALUE_LIMIT {
            return Err(ConfigError::Invalid {
                field: "max_value",
                reason: format!(
                    "{} exceeds {MAX_VALUE_LIMIT}; mirrored numerals would not fit a 64-bit integer",
                    self.run.max_value
                ),
            });
        }
        Ok(())
    }
}
