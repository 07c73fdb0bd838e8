//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.roster/config.yaml)
    pub config: Option<String>,

    /// Database file override (bypasses database_path in config)
    pub db: Option<String>,

    /// Debug logging requested
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            db: cli.db.clone(),
            debug: cli.debug,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get database override as `Option<&str>`.
    pub fn db_ref(&self) -> Option<&str> {
        self.db.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config: Some("/custom/config.yaml".to_string()),
            db: Some("/custom/roster.db".to_string()),
            debug: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.db_ref(), Some("/custom/roster.db"));
        assert!(opts.debug);
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from(["roster", "status", "--db", "/tmp/r.db", "--format", "table"]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Table);
        assert_eq!(opts.db_ref(), Some("/tmp/r.db"));
        assert_eq!(opts.config_ref(), None);
    }
}
