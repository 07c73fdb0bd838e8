//! [`EmployeeDirectory`] backed by the SQLite store
//!
//! SQLite calls are blocking, so each lookup runs on Tokio's blocking pool.
//! A file-backed directory gives every concurrent lookup its own read-only
//! connection, so lookups overlap up to the caller's worker budget.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::EmployeeStore;
use crate::directory::EmployeeDirectory;
use crate::error::{DirectoryError, StoreError};
use crate::models::Employee;

/// Shares one store between commands and concurrent directory lookups.
#[derive(Clone)]
pub struct StoreDirectory {
    store: Arc<Mutex<EmployeeStore>>,
    readers: Option<Arc<ReaderPool>>,
}

/// Idle read-only connections, opened on demand and reused.
struct ReaderPool {
    path: PathBuf,
    idle: Mutex<Vec<EmployeeStore>>,
}

impl ReaderPool {
    fn checkout(&self) -> Result<EmployeeStore, StoreError> {
        let reused = self.idle.lock().map_err(|_| StoreError::Poisoned)?.pop();
        match reused {
            Some(store) => Ok(store),
            None => {
                log::debug!("Opening reader connection to {}", self.path.display());
                EmployeeStore::open_reader(&self.path)
            }
        }
    }

    fn checkin(&self, store: EmployeeStore) {
        if let Ok(mut idle) = self.idle.lock() {
            idle.push(store);
        }
    }

    fn read_employee(&self, employee_id: &str) -> Result<Employee, StoreError> {
        let store = self.checkout()?;
        let result = store.read_employee(employee_id);
        self.checkin(store);
        result
    }
}

impl StoreDirectory {
    /// Wrap a single store; lookups take turns on its connection.
    #[cfg(test)]
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            readers: None,
        }
    }

    /// Open the database file, with pooled read-only connections for lookups.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let store = EmployeeStore::open_at(path)?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            readers: Some(Arc::new(ReaderPool {
                path: path.to_path_buf(),
                idle: Mutex::new(Vec::new()),
            })),
        })
    }

    #[cfg(test)]
    fn idle_readers(&self) -> usize {
        self.readers
            .as_ref()
            .and_then(|pool| pool.idle.lock().ok().map(|idle| idle.len()))
            .unwrap_or(0)
    }

    /// Run a closure against the underlying store
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&EmployeeStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let guard = self.store.lock().map_err(|_| StoreError::Poisoned)?;
        f(&guard)
    }

    /// Run a closure that needs exclusive access, such as a transaction
    pub fn with_store_mut<T>(
        &self,
        f: impl FnOnce(&mut EmployeeStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.store.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut guard)
    }
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmployeeNotFound(id) => DirectoryError::NotFound(id),
            other => DirectoryError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for StoreDirectory {
    async fn lookup_employee(&self, employee_id: &str) -> Result<Employee, DirectoryError> {
        let directory = self.clone();
        let employee_id = employee_id.to_string();

        tokio::task::spawn_blocking(move || match &directory.readers {
            Some(pool) => pool.read_employee(&employee_id),
            None => directory.with_store(|s| s.read_employee(&employee_id)),
        })
        .await
        .map_err(|e| DirectoryError::Unavailable(e.to_string()))?
        .map_err(DirectoryError::from)
    }
}
