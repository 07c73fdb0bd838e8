//! Init command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::store::EmployeeStore;

/// Write a default config (if none exists) and create the database schema.
///
/// An existing config file is left untouched.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Roster!".bold().green());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = if config_path.exists() {
        println!(
            "{} Config already present at {}",
            "○".dimmed(),
            config_path.display()
        );
        Config::load_from(&config_path)?
    } else {
        let mut config = Config::default();
        config.database_path = Some(match opts.db_ref() {
            Some(db) => PathBuf::from(db),
            None => config.database_path()?,
        });
        config.save_to(&config_path)?;
        println!(
            "{} Configuration saved to {}",
            "✓".green(),
            config_path.display().to_string().cyan()
        );
        config
    };

    let db_path = match opts.db_ref() {
        Some(db) => PathBuf::from(db),
        None => config.database_path()?,
    };
    let store = EmployeeStore::open_at(&db_path)?;
    let counts = store.counts()?;
    println!(
        "{} Database ready at {} ({} employees)",
        "✓".green(),
        db_path.display().to_string().cyan(),
        counts.employees
    );

    println!("\nNext: {}", "roster import <employees.json>".bold());
    Ok(())
}
