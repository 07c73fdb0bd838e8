//! Reporting structure aggregation.
//!
//! Resolves everyone below an employee through an [`EmployeeDirectory`],
//! counting them and replacing each node's shallow `direct_reports` with the
//! resolved records.
//!
//! Lookups fan out concurrently at every level of the chart, but all of them
//! draw from a single semaphore created per call, so the number of lookups in
//! flight across the whole tree never exceeds `max_concurrency`. A permit is
//! held only while its lookup runs; waiting on children never holds one.
//!
//! Each branch carries the ids of its ancestors. An id that shows up again in
//! its own reporting chain fails the call with [`HierarchyError::Cycle`]
//! instead of recursing forever. Diamonds are resolved once per path.

mod cancel;
mod sequential;

use futures::future::{BoxFuture, try_join_all};
use log::debug;
use tokio::sync::Semaphore;

pub use cancel::{CancelSignal, cancel_channel};
pub use sequential::aggregate_sequential;

use crate::directory::EmployeeDirectory;
use crate::error::{DirectoryError, HierarchyError};
use crate::models::{Employee, ReportingStructure};

/// Resolve the full reporting structure under `root`.
///
/// `root` must already be resolved; its `direct_reports` are expected to be
/// shallow references. At most `max_concurrency` directory lookups run at
/// once. The first failing branch fails the whole call and drops its
/// siblings; firing `cancel` stops new lookups and abandons in-flight ones.
///
/// # Errors
///
/// - [`HierarchyError::LookupFailure`] when any descendant cannot be resolved
/// - [`HierarchyError::Cancelled`] when `cancel` fires first
/// - [`HierarchyError::Cycle`] when an employee reports to itself transitively
/// - [`HierarchyError::InvalidConcurrency`] when `max_concurrency` is 0
pub async fn aggregate<D>(
    directory: &D,
    root: Employee,
    max_concurrency: usize,
    cancel: &CancelSignal,
) -> Result<ReportingStructure, HierarchyError>
where
    D: EmployeeDirectory + ?Sized,
{
    if max_concurrency == 0 {
        return Err(HierarchyError::InvalidConcurrency(max_concurrency));
    }

    debug!(
        "Aggregating reporting structure for [{}] with {} workers",
        root.employee_id, max_concurrency
    );

    let walker = Walker {
        directory,
        permits: Semaphore::new(max_concurrency.min(Semaphore::MAX_PERMITS)),
        cancel,
    };
    walker.structure(root, Vec::new()).await
}

/// State shared by every branch of one aggregation.
struct Walker<'a, D: ?Sized> {
    directory: &'a D,
    permits: Semaphore,
    cancel: &'a CancelSignal,
}

impl<D> Walker<'_, D>
where
    D: EmployeeDirectory + ?Sized,
{
    fn structure<'w>(
        &'w self,
        mut employee: Employee,
        mut lineage: Vec<String>,
    ) -> BoxFuture<'w, Result<ReportingStructure, HierarchyError>> {
        Box::pin(async move {
            debug!(
                "*Async* Constructing reporting structure for [{}]",
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

            let children = try_join_all(
                reports
                    .iter()
                    .map(|report| self.branch(&report.employee_id, &lineage)),
            )
            .await?;

            let number_of_reports: usize = children
                .iter()
                .map(|child| 1 + child.number_of_reports)
                .sum();
            employee.direct_reports =
                Some(children.into_iter().map(|child| child.employee).collect());

            Ok(ReportingStructure::new(employee, number_of_reports))
        })
    }

    async fn branch(
        &self,
        employee_id: &str,
        lineage: &[String],
    ) -> Result<ReportingStructure, HierarchyError> {
        guard_lineage(lineage, employee_id)?;
        let employee = self.resolve(employee_id).await?;
        self.structure(employee, lineage.to_vec()).await
    }

    /// One directory lookup under a worker permit.
    async fn resolve(&self, employee_id: &str) -> Result<Employee, HierarchyError> {
        let _permit = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(HierarchyError::Cancelled),
            permit = self.permits.acquire() => permit.map_err(|_| HierarchyError::Cancelled)?,
        };

        debug!("Resolving direct report [{}]", employee_id);

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(HierarchyError::Cancelled),
            found = self.directory.lookup_employee(employee_id) => {
                found.map_err(lookup_failure(employee_id))
            }
        }
    }
}

fn guard_lineage(lineage: &[String], employee_id: &str) -> Result<(), HierarchyError> {
    if lineage.iter().any(|ancestor| ancestor == employee_id) {
        return Err(HierarchyError::Cycle(employee_id.to_string()));
    }
    Ok(())
}

fn lookup_failure(employee_id: &str) -> impl FnOnce(DirectoryError) -> HierarchyError + '_ {
    move |source| HierarchyError::LookupFailure {
        id: employee_id.to_string(),
        source,
    }
}
