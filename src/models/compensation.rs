//! Compensation record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Salary information for one employee, keyed by employee id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub employee_id: String,

    pub salary: f64,

    /// Date the salary takes effect (`YYYY-MM-DD`)
    pub effective_date: NaiveDate,
}
