//! Mock employee directory for testing
//!
//! Serves employees from memory with optional per-id latency and records
//! enough about each lookup to assert on call counts, ordering and
//! concurrency.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::EmployeeDirectory;
use crate::error::DirectoryError;
use crate::models::Employee;

/// Mock directory for testing.
///
/// # Example
/// ```ignore
/// let mock = MockDirectory::new()
///     .with_employees(vec![Employee::new("e1", "John", "Lennon")])
///     .with_default_latency(Duration::from_millis(5));
///
/// let employee = mock.lookup_employee("e1").await?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Default)]
pub struct MockDirectory {
    /// Stored records, direct reports kept as references
    employees: HashMap<String, Employee>,
    /// Latency applied to specific ids
    latency: HashMap<String, Duration>,
    /// Latency for ids without a specific entry
    default_latency: Option<Duration>,
    /// Total lookups issued
    calls: AtomicUsize,
    /// Lookups currently in progress
    in_flight: AtomicUsize,
    /// Highest value `in_flight` ever reached
    max_in_flight: AtomicUsize,
    /// Ids in the order lookups started
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add employees, keyed by their ids. Nested reports are reduced to references.
    pub fn with_employees(mut self, employees: impl IntoIterator<Item = Employee>) -> Self {
        for employee in employees {
            self.employees
                .insert(employee.employee_id.clone(), employee.shallow());
        }
        self
    }

    /// Delay every lookup of `employee_id` by `delay`.
    pub fn with_latency(mut self, employee_id: &str, delay: Duration) -> Self {
        self.latency.insert(employee_id.to_string(), delay);
        self
    }

    /// Delay lookups of ids without a specific latency.
    pub fn with_default_latency(mut self, delay: Duration) -> Self {
        self.default_latency = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Ids looked up so far, in start order.
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.lock().await.clone()
    }
}

/// Decrements the in-flight counter even when the lookup future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeDirectory for MockDirectory {
    async fn lookup_employee(&self, employee_id: &str) -> Result<Employee, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookups.lock().await.push(employee_id.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        let delay = self
            .latency
            .get(employee_id)
            .copied()
            .or(self.default_latency);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(employee_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_known_employee() {
        let mock = MockDirectory::new()
            .with_employees(vec![Employee::new("e1", "John", "Lennon").with_reports(["e2"])]);

        let employee = mock.lookup_employee("e1").await.unwrap();

        assert_eq!(employee.full_name(), "John Lennon");
        assert_eq!(employee.report_ids(), Some(vec!["e2"]));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_lookup_unknown_employee() {
        let mock = MockDirectory::new();

        let err = mock.lookup_employee("missing").await.unwrap_err();

        assert_eq!(err, DirectoryError::NotFound("missing".to_string()));
        assert_eq!(mock.lookups().await, vec!["missing".to_string()]);
    }

    #[tokio::test]
    async fn test_tracks_concurrent_lookups() {
        let mock = MockDirectory::new()
            .with_employees(vec![Employee::reference("a"), Employee::reference("b")])
            .with_default_latency(Duration::from_millis(20));

        let (a, b) = tokio::join!(mock.lookup_employee("a"), mock.lookup_employee("b"));

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(mock.max_in_flight(), 2);
        assert_eq!(mock.in_flight(), 0);
    }
}
