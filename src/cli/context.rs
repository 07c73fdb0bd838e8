//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and opening the employee database.

use std::path::PathBuf;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::store::StoreDirectory;

/// Context for command execution containing config, store, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Database file actually opened (after `--db` override)
    pub db_path: PathBuf,
    /// Open store, shareable with concurrent lookups
    pub store: StoreDirectory,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config and open the database.
    ///
    /// `--db` takes precedence over `database_path` in the config file.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the database cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let db_path = match opts.db_ref() {
            Some(path) => PathBuf::from(path),
            None => config.database_path()?,
        };
        log::debug!("Opening database at {}", db_path.display());

        let store = StoreDirectory::open_at(&db_path)?;

        Ok(Self {
            config,
            db_path,
            store,
            format: opts.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opts(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Json,
            config: Some(dir.path().join("config.yaml").to_string_lossy().into_owned()),
            db: Some(dir.path().join("data").join("roster.db").to_string_lossy().into_owned()),
            debug: false,
        }
    }

    #[test]
    fn test_db_override_wins() {
        let dir = TempDir::new().unwrap();
        Config {
            database_path: Some(dir.path().join("elsewhere.db")),
            ..Config::default()
        }
        .save_to(&dir.path().join("config.yaml"))
        .unwrap();

        let ctx = CommandContext::new(&opts(&dir)).unwrap();

        assert_eq!(ctx.db_path, dir.path().join("data").join("roster.db"));
        assert!(ctx.db_path.exists());
        assert!(!dir.path().join("elsewhere.db").exists());
    }

    #[test]
    fn test_config_database_path_used_without_override() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("configured.db");
        Config {
            database_path: Some(db.clone()),
            max_worker_threads: 7,
            ..Config::default()
        }
        .save_to(&dir.path().join("config.yaml"))
        .unwrap();

        let mut opts = opts(&dir);
        opts.db = None;
        let ctx = CommandContext::new(&opts).unwrap();

        assert_eq!(ctx.db_path, db);
        assert_eq!(ctx.config.max_worker_threads, 7);
    }
}
