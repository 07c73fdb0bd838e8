//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and database status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Roster Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!(
            "{} Config file: {}",
            "✓".green(),
            config_path.display().to_string().cyan()
        );
    } else {
        println!(
            "{} Config file: {} {}",
            "○".dimmed(),
            config_path.display(),
            "(not found, using defaults)".dimmed()
        );
        println!("  → Run 'roster init' to create one");
    }

    let ctx = CommandContext::new(opts)?;
    let counts = ctx.store.with_store(|s| s.counts())?;

    println!(
        "{} Database: {}",
        "✓".green(),
        ctx.db_path.display().to_string().cyan()
    );
    println!("  Employees:     {}", counts.employees);
    println!("  Compensations: {}", counts.compensations);

    println!();
    println!("Worker budget:  {}", ctx.config.max_worker_threads);
    match ctx.config.report_timeout_secs {
        Some(secs) => println!("Report timeout: {}s", secs),
        None => println!("Report timeout: {}", "none".dimmed()),
    }

    Ok(())
}
