//! Display model implementations for table and JSON output
//!
//! Display models flatten domain records into CLI-friendly rows with
//! appropriate column names and serialization.

use serde::Serialize;
use tabled::Tabled;

use super::{Compensation, Employee, ReportingStructure};

/// Placeholder for missing optional values
const NONE: &str = "-";

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or(NONE).to_string()
}

/// Employee display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EmployeeDisplay {
    #[tabled(rename = "EMPLOYEE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "POSITION")]
    pub position: String,

    #[tabled(rename = "DEPARTMENT")]
    pub department: String,

    /// Direct report ids, comma separated (`-` when absent)
    #[tabled(rename = "DIRECT REPORTS")]
    pub direct_reports: String,
}

impl From<&Employee> for EmployeeDisplay {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.employee_id.clone(),
            name: employee.full_name(),
            position: or_dash(employee.position.as_deref()),
            department: or_dash(employee.department.as_deref()),
            direct_reports: match employee.report_ids() {
                None => NONE.to_string(),
                Some(ids) if ids.is_empty() => "(none)".to_string(),
                Some(ids) => ids.join(", "),
            },
        }
    }
}

impl From<Employee> for EmployeeDisplay {
    fn from(employee: Employee) -> Self {
        Self::from(&employee)
    }
}

/// Compensation display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CompensationDisplay {
    #[tabled(rename = "EMPLOYEE ID")]
    pub employee_id: String,

    #[tabled(rename = "SALARY")]
    pub salary: String,

    #[tabled(rename = "EFFECTIVE DATE")]
    pub effective_date: String,
}

impl From<Compensation> for CompensationDisplay {
    fn from(comp: Compensation) -> Self {
        Self {
            employee_id: comp.employee_id,
            salary: format!("{:.2}", comp.salary),
            effective_date: comp.effective_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// One row per employee of a resolved reporting structure.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportRowDisplay {
    #[tabled(rename = "LEVEL")]
    pub level: usize,

    #[tabled(rename = "EMPLOYEE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "POSITION")]
    pub position: String,

    #[tabled(rename = "MANAGER ID")]
    pub manager_id: String,

    #[tabled(rename = "REPORTS")]
    pub reports: usize,
}

impl ReportRowDisplay {
    /// Flatten a resolved structure depth-first, preserving report order.
    pub fn rows(structure: &ReportingStructure) -> Vec<Self> {
        let mut rows = Vec::new();
        collect_rows(&structure.employee, None, 0, &mut rows);
        rows
    }
}

fn collect_rows(
    employee: &Employee,
    manager: Option<&str>,
    level: usize,
    rows: &mut Vec<ReportRowDisplay>,
) {
    rows.push(ReportRowDisplay {
        level,
        id: employee.employee_id.clone(),
        name: employee.full_name(),
        position: or_dash(employee.position.as_deref()),
        manager_id: or_dash(manager),
        reports: employee.count_reports(),
    });

    for report in employee.direct_reports.iter().flatten() {
        collect_rows(report, Some(&employee.employee_id), level + 1, rows);
    }
}
