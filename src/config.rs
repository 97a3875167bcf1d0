//! Optional user configuration
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (nothing configured)
//! 2. YAML file: `~/.calc.yaml`, or the path in `$CALC_CONFIG`
//! 3. Environment variables: `CALC_*` prefix (e.g. `CALC_USERNAME`)
//!
//! Configuration is cosmetic: it only feeds the greeting on a bare `calc`
//! invocation and never influences arithmetic.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use directories::BaseDirs;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::infrastructure::{ConfigProvider, InfraError, InfraResult};

/// File name looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".calc.yaml";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CALC_CONFIG";

const ENV_PREFIX: &str = "CALC";

/// Settings read from the config file and environment.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name used to greet the user on a bare invocation
    pub username: Option<String>,
}

/// `~/.calc.yaml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// Config file location: `$CALC_CONFIG` (with `~` and `$VAR` expanded) or the default.
pub fn config_path() -> InfraResult<Option<PathBuf>> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(raw) if !raw.is_empty() => expand_path(&raw).map(Some),
        _ => Ok(default_config_path()),
    }
}

fn expand_path(raw: &str) -> InfraResult<PathBuf> {
    shellexpand::full(raw)
        .map(|s| PathBuf::from(s.into_owned()))
        .map_err(|e| InfraError::PathExpansion {
            path: raw.to_string(),
            message: e.to_string(),
        })
}

impl Settings {
    /// Load settings from the config file and `CALC_*` environment variables.
    #[instrument(level = "debug")]
    pub fn load() -> InfraResult<Self> {
        let path = config_path()?;
        let mut builder = Config::builder();
        if let Some(path) = &path {
            builder = builder.add_source(yaml_source(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|source| match &path {
                Some(path) => InfraError::Config {
                    path: path.clone(),
                    source,
                },
                None => InfraError::Environment(source),
            })?;

        let settings: Self = config
            .try_deserialize()
            .map_err(InfraError::Environment)?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Load settings from a single YAML file; a missing file yields defaults.
    pub fn from_file(path: &Path) -> InfraResult<Self> {
        let to_err = |source| InfraError::Config {
            path: path.to_path_buf(),
            source,
        };
        Config::builder()
            .add_source(yaml_source(path))
            .build()
            .map_err(to_err)?
            .try_deserialize()
            .map_err(to_err)
    }

    /// Like [`Settings::load`], but a broken config is logged and ignored.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("ignoring configuration: {}", e);
            Self::default()
        })
    }
}

fn yaml_source(path: &Path) -> impl config::Source + Send + Sync + 'static {
    File::from(path).format(FileFormat::Yaml).required(false)
}

impl ConfigProvider for Settings {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "username" => self.username.clone(),
            _ => None,
        }
    }
}
