//! Employee field arguments shared by create and update

use crate::models::Employee;

/// Optional employee attributes
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EmployeeFieldArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub department: Option<String>,
}

impl EmployeeFieldArgs {
    /// True when no attribute was given.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.position.is_none()
            && self.department.is_none()
    }

    /// Overwrite the attributes that were given, leaving the rest alone.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(v) = self.first_name {
            employee.first_name = Some(v);
        }
        if let Some(v) = self.last_name {
            employee.last_name = Some(v);
        }
        if let Some(v) = self.position {
            employee.position = Some(v);
        }
        if let Some(v) = self.department {
            employee.department = Some(v);
        }
    }
}

/// Direct report ids for an employee
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportListArgs {
    /// Id of a direct report (repeat in reporting order)
    #[arg(long = "report", value_name = "EMPLOYEE_ID")]
    pub report: Vec<String>,

    /// Record that the employee has no direct reports
    #[arg(long, conflicts_with = "report")]
    pub no_reports: bool,
}

impl ReportListArgs {
    /// The direct report list to store, or `None` if none was given.
    ///
    /// `--no-reports` yields an empty list, which is distinct from leaving
    /// reporting information unset.
    pub fn resolve(&self) -> Option<Vec<String>> {
        if self.no_reports {
            Some(Vec::new())
        } else if self.report.is_empty() {
            None
        } else {
            Some(self.report.clone())
        }
    }
}
