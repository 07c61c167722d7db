//! Configuration management and validation.
//!
//! Provides the processing configuration: gap engine defaults, the loader
//! fetch deadline, the default input source, and the field alias table.
//! Configuration is TOML; a missing default config file is not an error,
//! it just means built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::app::services::field_normalizer::AliasTable;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BUFFER_FEET, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_SPACING_FEET,
};
use crate::{Error, Result};

/// Global configuration for RailCore processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RailcoreConfig {
    /// Deadline in seconds for a single payload read or fetch
    pub fetch_timeout_secs: u64,

    /// Default spacing threshold (feet) for the gaps view
    pub spacing_feet: f64,

    /// Default endpoint buffer (feet) for the gaps view
    pub buffer_feet: f64,

    /// Default input source (directory, file, or URL) when the CLI gives none
    pub input: Option<String>,

    /// Header alias table for field normalization
    pub aliases: AliasTable,
}

impl Default for RailcoreConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            spacing_feet: DEFAULT_SPACING_FEET,
            buffer_feet: DEFAULT_BUFFER_FEET,
            input: None,
            aliases: AliasTable::default(),
        }
    }
}

impl RailcoreConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried; a missing default file falls back to built-in
    /// defaults (configuration absence is a degradation, not a failure).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Self::from_toml_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_toml_file(&path),
            _ => {
                debug!("No config file found; using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: RailcoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The platform default config file location
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration(
                "fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.spacing_feet.is_finite() || self.spacing_feet < 0.0 {
            return Err(Error::configuration(format!(
                "spacing_feet must be a non-negative number, got {}",
                self.spacing_feet
            )));
        }

        if !self.buffer_feet.is_finite() || self.buffer_feet < 0.0 {
            return Err(Error::configuration(format!(
                "buffer_feet must be a non-negative number, got {}",
                self.buffer_feet
            )));
        }

        Ok(())
    }

    /// The loader fetch deadline as a duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Create configuration with a custom fetch timeout
    pub fn with_fetch_timeout_secs(mut self, seconds: u64) -> Self {
        self.fetch_timeout_secs = seconds;
        self
    }

    /// Create configuration with a custom spacing default
    pub fn with_spacing_feet(mut self, spacing_feet: f64) -> Self {
        self.spacing_feet = spacing_feet;
        self
    }

    /// Create configuration with a custom buffer default
    pub fn with_buffer_feet(mut self, buffer_feet: f64) -> Self {
        self.buffer_feet = buffer_feet;
        self
    }

    /// Create configuration with a custom alias table
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }
}
