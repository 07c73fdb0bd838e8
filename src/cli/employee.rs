//! Employee commands

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, EmployeeFieldArgs, OutputFormat, ReportListArgs};
use crate::error::{Error, Result};
use crate::models::{Employee, EmployeeDisplay};
use crate::output::{Formattable, json};

/// Run the employee create command
pub fn create(
    opts: &GlobalOptions,
    first_name: String,
    last_name: String,
    position: Option<String>,
    department: Option<String>,
    reports: &ReportListArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut employee = Employee {
        position,
        department,
        ..Employee::new(String::new(), first_name, last_name)
    };
    if let Some(ids) = reports.resolve() {
        employee = employee.with_reports(ids);
    }

    let created = ctx.store.with_store(|s| s.create_employee(&employee))?;
    debug!("Created employee [{}]", created.employee_id);

    created.print(ctx.format)
}

/// Run the employee get command
pub fn get(opts: &GlobalOptions, employee_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let employee = ctx.store.with_store(|s| s.read_employee(employee_id))?;
    employee.print(ctx.format)
}

/// Run the employee update command
///
/// Only the given fields change. Reports are replaced when `--report` or
/// `--no-reports` is given and removed entirely with `--clear-reports`.
pub fn update(
    opts: &GlobalOptions,
    employee_id: &str,
    fields: EmployeeFieldArgs,
    reports: &ReportListArgs,
    clear_reports: bool,
) -> Result<()> {
    let new_reports = reports.resolve();
    if fields.is_empty() && new_reports.is_none() && !clear_reports {
        return Err(Error::Other(format!(
            "Nothing to update for employee {}; pass at least one field or report option",
            employee_id
        )));
    }

    let ctx = CommandContext::new(opts)?;
    let mut employee = ctx.store.with_store(|s| s.read_employee(employee_id))?;

    fields.apply(&mut employee);
    if clear_reports {
        employee.direct_reports = None;
    } else if let Some(ids) = new_reports {
        employee = employee.with_reports(ids);
    }

    let updated = ctx.store.with_store(|s| s.update_employee(&employee))?;
    updated.print(ctx.format)
}

/// Run the employee list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let employees = ctx.store.with_store(|s| s.list_employees())?;
    debug!("Listing {} employees", employees.len());

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&employees)?);
            Ok(())
        }
        format => employees
            .iter()
            .map(EmployeeDisplay::from)
            .collect::<Vec<_>>()
            .print(format),
    }
}
