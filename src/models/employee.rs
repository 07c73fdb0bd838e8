//! Employee record

use serde::{Deserialize, Serialize};

/// An employee and their direct reports.
///
/// `direct_reports` has three meaningful states:
/// - `None`: no reporting information at all
/// - `Some(vec![])`: explicitly nobody reports to this employee
/// - `Some(refs)`: either shallow references (only `employee_id` set, as
///   loaded from the store) or fully resolved employees after aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque unique identifier
    #[serde(default)]
    pub employee_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Ordered direct reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_reports: Option<Vec<Employee>>,
}

impl Employee {
    /// Create an employee with a name and no reporting information.
    pub fn new(
        employee_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Create a shallow reference carrying only an id.
    pub fn reference(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[cfg(test)]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set direct reports as shallow references, in the given order.
    pub fn with_reports<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.direct_reports = Some(ids.into_iter().map(Employee::reference).collect());
        self
    }

    /// "First Last", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ids of the direct reports in listed order, `None` when absent.
    pub fn report_ids(&self) -> Option<Vec<&str>> {
        self.direct_reports
            .as_ref()
            .map(|reports| reports.iter().map(|r| r.employee_id.as_str()).collect())
    }

    /// Count every employee below this one in the materialized tree.
    ///
    /// Only meaningful after aggregation; on shallow references this is
    /// just the number of direct reports.
    pub fn count_reports(&self) -> usize {
        self.direct_reports.as_deref().map_or(0, |reports| {
            reports.iter().map(|r| 1 + r.count_reports()).sum()
        })
    }

    /// Copy of this employee with direct reports reduced to references.
    pub fn shallow(&self) -> Self {
        Self {
            direct_reports: self
                .direct_reports
                .as_ref()
                .map(|reports| reports.iter().map(|r| Employee::reference(&r.employee_id)).collect()),
            ..self.clone()
        }
    }
}
