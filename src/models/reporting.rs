//! Reporting structure result

use serde::{Deserialize, Serialize};

use super::Employee;

/// An employee together with the number of people below them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,

    /// Direct and transitive reports, excluding the employee itself
    pub number_of_reports: usize,
}

impl ReportingStructure {
    pub fn new(employee: Employee, number_of_reports: usize) -> Self {
        Self {
            employee,
            number_of_reports,
        }
    }

    /// Structure for an employee with nobody below them.
    pub fn leaf(employee: Employee) -> Self {
        Self::new(employee, 0)
    }
}
