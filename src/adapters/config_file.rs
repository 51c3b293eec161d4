//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over an optional JSON document.  Fields left
//! out of the file keep their defaults; a missing file yields
//! [`MonitorConfig::default()`].

use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::MonitorConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "THERMOWATCH_CONFIG";

const DEFAULT_PATH: &str = "thermowatch.json";

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `THERMOWATCH_CONFIG`, else `thermowatch.json` in the
    /// working directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
        Self::new(path)
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<MonitorConfig, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let config = MonitorConfig::from_json(&text).inspect_err(|e| {
                    warn!("Config: {} rejected: {e}", self.path.display());
                })?;
                info!("Config: loaded {}", self.path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Config: {} not found, using defaults", self.path.display());
                Ok(MonitorConfig::default())
            }
            Err(e) => {
                warn!("Config: cannot read {}: {e}", self.path.display());
                Err(ConfigError::IoError)
            }
        }
    }
}
