//! Configuration management for Roster

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::store::EmployeeStore;

/// Application configuration (~/.roster/config.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (defaults to ~/.roster/roster.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Maximum concurrent directory lookups per reporting-structure request
    #[serde(default = "default_max_worker_threads")]
    pub max_worker_threads: usize,

    /// Abandon a reporting-structure request after this many seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_timeout_secs: Option<u64>,
}

fn default_max_worker_threads() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            max_worker_threads: default_max_worker_threads(),
            report_timeout_secs: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".roster").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path.
    ///
    /// A missing file yields the defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.max_worker_threads == 0 {
            return Err(
                ConfigError::Invalid("max_worker_threads must be at least 1".to_string()).into(),
            );
        }
        if self.report_timeout_secs == Some(0) {
            return Err(
                ConfigError::Invalid("report_timeout_secs must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Database path, falling back to the default location
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(EmployeeStore::default_path()?),
        }
    }

    pub fn report_timeout(&self) -> Option<Duration> {
        self.report_timeout_secs.map(Duration::from_secs)
    }
}
