//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod compensation;
pub mod context;
pub mod employee;
pub mod import;
pub mod init;
pub mod report;
pub mod status;

pub use args::{EmployeeFieldArgs, GlobalOptions, OutputFormat, ReportArgs, ReportListArgs};
pub use context::CommandContext;

/// Roster - employee and compensation records with reporting structures
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ROSTER_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ROSTER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override database file location
    #[arg(long, global = true, env = "ROSTER_DB", hide_env = true)]
    pub db: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ROSTER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file and create the database
    Init,

    /// Show configuration and database status
    Status,

    /// Create, read and update employees
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Create, read and update compensation records
    #[command(subcommand)]
    Compensation(CompensationCommands),

    /// Compute the full reporting structure under an employee
    #[command(after_help = "EXAMPLES:\n  \
            roster report <id>                     # Tree with total count\n  \
            roster report <id> --max-workers 16    # Wider lookup budget\n  \
            roster report <id> --timeout 5         # Give up after 5 seconds\n  \
            roster report <id> --compare           # Also time a sequential run")]
    Report(ReportArgs),

    /// Load employees from a JSON array, keeping their ids
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

/// Employee subcommands
#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// Create an employee under a new id
    Create {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[command(flatten)]
        reports: ReportListArgs,
    },

    /// Show one employee
    Get {
        employee_id: String,
    },

    /// Change fields of an existing employee
    Update {
        employee_id: String,

        #[command(flatten)]
        fields: EmployeeFieldArgs,

        #[command(flatten)]
        reports: ReportListArgs,

        /// Remove reporting information entirely
        #[arg(long, conflicts_with_all = ["report", "no_reports"])]
        clear_reports: bool,
    },

    /// List all employees
    #[command(visible_alias = "ls")]
    List,
}

/// Compensation subcommands
#[derive(Subcommand, Debug)]
pub enum CompensationCommands {
    /// Record compensation for an existing employee
    Create {
        employee_id: String,

        #[arg(long)]
        salary: f64,

        /// Date the salary takes effect (YYYY-MM-DD)
        #[arg(long)]
        effective_date: chrono::NaiveDate,
    },

    /// Show compensation for an employee
    Get {
        employee_id: String,
    },

    /// Change an existing compensation record
    Update {
        employee_id: String,

        #[arg(long)]
        salary: Option<f64>,

        /// Date the salary takes effect (YYYY-MM-DD)
        #[arg(long)]
        effective_date: Option<chrono::NaiveDate>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_flags() {
        let cli = Cli::parse_from([
            "roster",
            "report",
            "john",
            "--max-workers",
            "8",
            "--timeout",
            "3",
            "--compare",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.employee_id, "john");
                assert_eq!(args.max_workers, Some(8));
                assert_eq!(args.timeout, Some(3));
                assert!(args.compare);
            }
            other => panic!("Expected report command, got {:?}", other),
        }
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_parse_employee_create_with_reports() {
        let cli = Cli::parse_from([
            "roster",
            "employee",
            "create",
            "--first-name",
            "John",
            "--last-name",
            "Lennon",
            "--report",
            "paul",
            "--report",
            "ringo",
        ]);

        match cli.command {
            Commands::Employee(EmployeeCommands::Create { reports, .. }) => {
                assert_eq!(
                    reports.resolve(),
                    Some(vec!["paul".to_string(), "ringo".to_string()])
                );
            }
            other => panic!("Expected employee create, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_reports_conflicts_with_report() {
        let result = Cli::try_parse_from([
            "roster",
            "employee",
            "update",
            "john",
            "--report",
            "paul",
            "--clear-reports",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_compensation_date() {
        let cli = Cli::parse_from([
            "roster",
            "compensation",
            "create",
            "john",
            "--salary",
            "1100.10",
            "--effective-date",
            "2024-11-01",
        ]);

        match cli.command {
            Commands::Compensation(CompensationCommands::Create {
                salary,
                effective_date,
                ..
            }) => {
                assert_eq!(salary, 1100.10);
                assert_eq!(effective_date.to_string(), "2024-11-01");
            }
            other => panic!("Expected compensation create, got {:?}", other),
        }
    }
}
