//! Project configuration.
//!
//! Reads the optional `.ssmenv.toml` in the working directory. Every field
//! is optional; command-line flags and environment variables take
//! precedence over the file, and built-in defaults fill the rest.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::{
    CONFIG_FILE, DEFAULT_BATCH_SIZE, DEFAULT_REGION, ENV_DIR, ENV_FILE_EXT, ENV_LIST_FILE,
    MAX_BATCH_SIZE, REGION_VAR,
};
use crate::error::{ConfigError, Result, ValidationError};

/// Contents of `.ssmenv.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ssmenv: Settings,
}

/// The `[ssmenv]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// AWS region of the parameter store
    pub region: Option<String>,
    /// Names per batch request
    pub batch_size: Option<usize>,
    /// Env list read by `populate`
    pub list_file: Option<PathBuf>,
    /// Directory for `<env>.env` files
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Load `.ssmenv.toml` from the current directory, or defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load a config file, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Region: flag, then `AWS_DEFAULT_REGION`, then file, then default.
    pub fn region(&self, flag: Option<&str>) -> String {
        self.region_with(flag, std::env::var(REGION_VAR).ok())
    }

    fn region_with(&self, flag: Option<&str>, from_env: Option<String>) -> String {
        flag.map(str::to_string)
            .or(from_env.filter(|v| !v.is_empty()))
            .or_else(|| self.ssmenv.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// Batch size: flag, then file, then default.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBatchSize` outside `1..=10`.
    pub fn batch_size(&self, flag: Option<usize>) -> Result<usize> {
        let size = flag
            .or(self.ssmenv.batch_size)
            .unwrap_or(DEFAULT_BATCH_SIZE);

        if size == 0 || size > MAX_BATCH_SIZE {
            return Err(ValidationError::InvalidBatchSize(size).into());
        }
        Ok(size)
    }

    /// Env list path: flag, then file, then `.envList`.
    pub fn list_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.ssmenv.list_file.clone())
            .unwrap_or_else(|| PathBuf::from(ENV_LIST_FILE))
    }

    /// Output path: flag, then `<output_dir>/<env>.env`.
    pub fn output(&self, flag: Option<PathBuf>, env: &str) -> PathBuf {
        flag.unwrap_or_else(|| {
            self.ssmenv
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(ENV_DIR))
                .join(format!("{}.{}", env, ENV_FILE_EXT))
        })
    }
}
