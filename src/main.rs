//! Roster CLI - employee and compensation records with reporting structures

use clap::Parser;

mod cli;
mod config;
mod directory;
mod error;
mod hierarchy;
mod models;
mod output;
mod store;

use cli::{Cli, Commands, CompensationCommands, EmployeeCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Employee(cmd) => match cmd {
            EmployeeCommands::Create {
                first_name,
                last_name,
                position,
                department,
                reports,
            } => cli::employee::create(
                &opts, first_name, last_name, position, department, &reports,
            ),
            EmployeeCommands::Get { employee_id } => cli::employee::get(&opts, &employee_id),
            EmployeeCommands::Update {
                employee_id,
                fields,
                reports,
                clear_reports,
            } => cli::employee::update(&opts, &employee_id, fields, &reports, clear_reports),
            EmployeeCommands::List => cli::employee::list(&opts),
        },
        Commands::Compensation(cmd) => match cmd {
            CompensationCommands::Create {
                employee_id,
                salary,
                effective_date,
            } => cli::compensation::create(&opts, &employee_id, salary, effective_date),
            CompensationCommands::Get { employee_id } => {
                cli::compensation::get(&opts, &employee_id)
            }
            CompensationCommands::Update {
                employee_id,
                salary,
                effective_date,
            } => cli::compensation::update(&opts, &employee_id, salary, effective_date),
        },
        Commands::Report(args) => cli::report::run(&opts, &args).await,
        Commands::Import { file } => cli::import::run(&opts, &file),
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}
