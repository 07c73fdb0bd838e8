//! Org chart fixtures for directory and hierarchy tests.
//!
//! Each builder returns the root record (as the caller would have read it)
//! plus every record a directory needs to serve the chart.

use crate::models::Employee;

/// A chart of records plus the root to aggregate from.
pub struct Chart {
    pub root: Employee,
    pub records: Vec<Employee>,
}

impl Chart {
    fn new(root: Employee, mut records: Vec<Employee>) -> Self {
        records.push(root.clone());
        Self { root, records }
    }
}

pub fn employee(id: &str) -> Employee {
    Employee::new(id, format!("First-{id}"), format!("Last-{id}"))
        .with_position("Engineer")
        .with_department("Engineering")
}

/// John manages Paul and Ringo; Ringo manages Pete and George.
pub fn beatles() -> Chart {
    let john = Employee::new("john", "John", "Lennon")
        .with_position("Development Manager")
        .with_department("Engineering")
        .with_reports(["paul", "ringo"]);

    Chart::new(
        john,
        vec![
            Employee::new("paul", "Paul", "McCartney")
                .with_position("Developer I")
                .with_department("Engineering"),
            Employee::new("ringo", "Ringo", "Starr")
                .with_position("Developer V")
                .with_department("Engineering")
                .with_reports(["pete", "george"]),
            Employee::new("pete", "Pete", "Best")
                .with_position("Developer II")
                .with_department("Engineering"),
            Employee::new("george", "George", "Harrison")
                .with_position("Developer III")
                .with_department("Engineering"),
        ],
    )
}

/// Root with `ids.len()` direct reports, none of whom manage anyone.
pub fn single_level(ids: &[&str]) -> Chart {
    Chart::new(
        employee("root").with_reports(ids.iter().copied()),
        ids.iter().map(|id| employee(id)).collect(),
    )
}

/// Root over `top` managers, each over `per_manager` individual contributors.
///
/// Manager ids are `m{i}`, contributor ids `m{i}-r{j}`.
pub fn two_level(top: usize, per_manager: usize) -> Chart {
    let managers: Vec<String> = (0..top).map(|i| format!("m{i}")).collect();
    let mut records = Vec::new();

    for manager in &managers {
        let reports: Vec<String> = (0..per_manager).map(|j| format!("{manager}-r{j}")).collect();
        records.extend(reports.iter().map(|id| employee(id)));
        records.push(employee(manager).with_reports(reports));
    }

    Chart::new(employee("root").with_reports(managers), records)
}
