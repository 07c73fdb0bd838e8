//! One-lookup-at-a-time aggregation.
//!
//! Produces exactly what [`aggregate`](super::aggregate) produces, without any
//! concurrency. Used as a correctness oracle and for `report --compare`.

use futures::future::BoxFuture;
use log::debug;

use super::{CancelSignal, guard_lineage, lookup_failure};
use crate::directory::EmployeeDirectory;
use crate::error::HierarchyError;
use crate::models::{Employee, ReportingStructure};

/// Resolve the full reporting structure under `root`, one lookup at a time.
///
/// Firing `cancel` abandons the lookup in progress and fails with
/// [`HierarchyError::Cancelled`].
pub async fn aggregate_sequential<D>(
    directory: &D,
    root: Employee,
    cancel: &CancelSignal,
) -> Result<ReportingStructure, HierarchyError>
where
    D: EmployeeDirectory + ?Sized,
{
    walk(directory, cancel, root, Vec::new()).await
}

fn walk<'a, D>(
    directory: &'a D,
    cancel: &'a CancelSignal,
    mut employee: Employee,
    mut lineage: Vec<String>,
) -> BoxFuture<'a, Result<ReportingStructure, HierarchyError>>
where
    D: EmployeeDirectory + ?Sized,
{
    Box::pin(async move {
        debug!(
            "*Sync* Constructing reporting structure for [{}]",
            employee.employee_id
        );

        let reports = match employee.direct_reports.take() {
            None => return Ok(ReportingStructure::leaf(employee)),
            Some(reports) if reports.is_empty() => {
                employee.direct_reports = Some(reports);
                return Ok(ReportingStructure::leaf(employee));
            }
            Some(reports) => reports,
        };

        lineage.push(employee.employee_id.clone());

        let mut resolved = Vec::with_capacity(reports.len());
        let mut number_of_reports = 0;
        for report in &reports {
            guard_lineage(&lineage, &report.employee_id)?;
            let child = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(HierarchyError::Cancelled),
                found = directory.lookup_employee(&report.employee_id) => {
                    found.map_err(lookup_failure(&report.employee_id))?
                }
            };

            let structure = walk(directory, cancel, child, lineage.clone()).await?;
            number_of_reports += 1 + structure.number_of_reports;
            resolved.push(structure.employee);
        }

        employee.direct_reports = Some(resolved);
        Ok(ReportingStructure::new(employee, number_of_reports))
    })
}
