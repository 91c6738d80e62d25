//! Configuration
//!
//! Layered from built-in defaults, an optional `meteogram.toml` file in the
//! working directory, then `METEOGRAM_*` environment variables. Nested keys
//! use a double underscore, e.g. `METEOGRAM_AVERAGER__WINDOW_SIZE=5`.

use std::path::Path;

use running_avg::{AveragerConfig, AveragerError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asos::AsosConfig;
use crate::error::MeteogramError;

const ENV_PREFIX: &str = "METEOGRAM";
const CONFIG_FILE: &str = "meteogram";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteogramConfig {
    /// ASOS request settings
    #[serde(default)]
    pub asos: AsosConfig,

    /// Running average settings
    #[serde(default)]
    pub averager: AveragerConfig,

    /// Log level filter (e.g. "info", "meteogram=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for MeteogramConfig {
    fn default() -> Self {
        Self {
            asos: AsosConfig::default(),
            averager: AveragerConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl MeteogramConfig {
    /// Load configuration from `meteogram.toml` (if present) and environment
    ///
    /// # Errors
    ///
    /// Returns `Config` if a source cannot be read or deserialized, or a
    /// validation error from [`Self::validate`].
    pub fn load() -> Result<Self, MeteogramError> {
        Self::load_layered(
            config::File::with_name(CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file path, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file is missing or invalid.
    pub fn load_from(path: &Path) -> Result<Self, MeteogramError> {
        Self::load_layered(config::File::from(path), Self::environment())
    }

    /// Parse configuration from a TOML string, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns `Config` if the TOML is invalid or has the wrong shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, MeteogramError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindowSize` for a zero averaging window and
    /// `InvalidLookback` for an unusable default request window.
    pub fn validate(&self) -> Result<(), MeteogramError> {
        if self.averager.window_size == 0 {
            return Err(AveragerError::InvalidWindowSize(0).into());
        }
        self.asos.validate()
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_layered<F>(file: F, environment: config::Environment) -> Result<Self, MeteogramError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;

        debug!(
            window_size = config.averager.window_size,
            base_url = %config.asos.base_url,
            "Loaded configuration"
        );
        Ok(config)
    }
}
