//! Employee directory abstraction
//!
//! The hierarchy aggregator only needs one thing from the outside world: a
//! way to resolve an employee id into a full record. [`EmployeeDirectory`]
//! is that seam; the SQLite store implements it for production and
//! a mock implements it for tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DirectoryError;
use crate::models::Employee;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockDirectory;

/// Resolves employee ids to records.
///
/// Implementations must tolerate concurrent calls with different ids.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Look up one employee. Direct reports come back as shallow references.
    async fn lookup_employee(&self, employee_id: &str) -> Result<Employee, DirectoryError>;
}

#[async_trait]
impl<D: EmployeeDirectory + ?Sized> EmployeeDirectory for Arc<D> {
    async fn lookup_employee(&self, employee_id: &str) -> Result<Employee, DirectoryError> {
        (**self).lookup_employee(employee_id).await
    }
}
