//! Compensation commands
//!
//! Compensation is keyed by employee id and can only be recorded for an
//! employee that exists.

use chrono::NaiveDate;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::{Error, Result};
use crate::models::Compensation;
use crate::output::Formattable;

/// Run the compensation create command
///
/// Recording compensation again for the same employee replaces the old record.
pub fn create(
    opts: &GlobalOptions,
    employee_id: &str,
    salary: f64,
    effective_date: NaiveDate,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let compensation = ctx.store.with_store(|s| {
        s.read_employee(employee_id)?;
        s.save_compensation(&Compensation {
            employee_id: employee_id.to_string(),
            salary,
            effective_date,
        })
    })?;

    compensation.print(ctx.format)
}

/// Run the compensation get command
pub fn get(opts: &GlobalOptions, employee_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let compensation = ctx.store.with_store(|s| s.read_compensation(employee_id))?;
    compensation.print(ctx.format)
}

/// Run the compensation update command
pub fn update(
    opts: &GlobalOptions,
    employee_id: &str,
    salary: Option<f64>,
    effective_date: Option<NaiveDate>,
) -> Result<()> {
    if salary.is_none() && effective_date.is_none() {
        return Err(Error::Other(format!(
            "Nothing to update for compensation {}; pass --salary or --effective-date",
            employee_id
        )));
    }

    let ctx = CommandContext::new(opts)?;

    let compensation = ctx.store.with_store(|s| {
        s.read_employee(employee_id)?;
        let mut compensation = s.read_compensation(employee_id)?;
        if let Some(salary) = salary {
            compensation.salary = salary;
        }
        if let Some(date) = effective_date {
            compensation.effective_date = date;
        }
        s.save_compensation(&compensation)
    })?;

    compensation.print(ctx.format)
}
