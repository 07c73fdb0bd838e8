//! SQLite-based employee and compensation storage
//!
//! Direct reports are stored as a JSON array of ids. A `NULL` column means
//! the employee has no reporting information; `[]` means nobody reports to
//! them. Both states round-trip unchanged.

use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::{Compensation, Employee};

/// Schema version stored in `PRAGMA user_version`
const SCHEMA_VERSION: i32 = 1;

const DATE_FORMAT: &str = "%Y-%m-%d";

type Result<T> = std::result::Result<T, StoreError>;

/// Raw employee columns before report decoding
type EmployeeRow = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// SQLite-backed record storage
pub struct EmployeeStore {
    conn: Connection,
}

/// Record counts for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub employees: usize,
    pub compensations: usize,
}

impl EmployeeStore {
    /// Default database location (~/.roster/roster.db)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::Io("Could not determine home directory".to_string()))?;
        Ok(home.join(".roster").join("roster.db"))
    }

    /// Open or create a database file, creating parent directories as needed
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("Failed to create data dir: {}", e)))?;
        }

        Self::init(Connection::open(path)?)
    }

    /// Open an existing database for lookups only.
    ///
    /// The schema is not touched, so the file must already have been opened
    /// with [`open_at`](Self::open_at).
    pub fn open_reader(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory database
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        let version: i32 = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;

        if version != 0 && version != SCHEMA_VERSION {
            return Err(StoreError::SchemaMismatch {
                found: version,
                expected: SCHEMA_VERSION,
            });
        }

        if version == 0 {
            log::info!("Initializing employee database schema v{}", SCHEMA_VERSION);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                employee_id TEXT PRIMARY KEY NOT NULL,
                first_name TEXT,
                last_name TEXT,
                position TEXT,
                department TEXT,
                direct_reports TEXT
            );

            CREATE TABLE IF NOT EXISTS compensations (
                employee_id TEXT PRIMARY KEY NOT NULL,
                salary REAL NOT NULL,
                effective_date TEXT NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn })
    }

    /// Insert a new employee under a freshly generated id
    pub fn create_employee(&self, employee: &Employee) -> Result<Employee> {
        let mut created = employee.shallow();
        created.employee_id = uuid::Uuid::new_v4().to_string();
        log::debug!("Creating employee [{}]", created.employee_id);

        self.upsert(&created)?;
        Ok(created)
    }

    /// Fetch one employee with direct reports as references
    pub fn read_employee(&self, employee_id: &str) -> Result<Employee> {
        log::debug!("Retrieving employee with id [{}]", employee_id);

        let row = self
            .conn
            .query_row(
                "SELECT employee_id, first_name, last_name, position, department, direct_reports
                 FROM employees WHERE employee_id = ?1",
                [employee_id],
                employee_row,
            )
            .optional()?;

        match row {
            Some(row) => decode_employee(row),
            None => Err(StoreError::EmployeeNotFound(employee_id.to_string())),
        }
    }

    /// Replace an employee record, inserting it if missing
    pub fn update_employee(&self, employee: &Employee) -> Result<Employee> {
        log::debug!("Updating employee [{}]", employee.employee_id);

        let stored = employee.shallow();
        self.upsert(&stored)?;
        Ok(stored)
    }

    /// All employees ordered by name
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT employee_id, first_name, last_name, position, department, direct_reports
             FROM employees ORDER BY last_name, first_name, employee_id",
        )?;

        let rows = stmt
            .query_map([], employee_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(decode_employee).collect()
    }

    /// Upsert a batch of employees atomically, keeping their ids
    pub fn import_employees(&mut self, employees: &[Employee]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for employee in employees {
            write_employee(&tx, &employee.shallow())?;
        }
        tx.commit()?;

        log::info!("Imported {} employees", employees.len());
        Ok(employees.len())
    }

    /// Store compensation, replacing any existing record for the employee
    pub fn save_compensation(&self, compensation: &Compensation) -> Result<Compensation> {
        log::debug!("Saving compensation for [{}]", compensation.employee_id);

        self.conn.execute(
            "INSERT OR REPLACE INTO compensations (employee_id, salary, effective_date)
             VALUES (?1, ?2, ?3)",
            params![
                compensation.employee_id,
                compensation.salary,
                compensation.effective_date.format(DATE_FORMAT).to_string(),
            ],
        )?;

        Ok(compensation.clone())
    }

    /// Fetch the compensation record for an employee
    pub fn read_compensation(&self, employee_id: &str) -> Result<Compensation> {
        log::debug!("Retrieving compensation with id [{}]", employee_id);

        let row: Option<(String, f64, String)> = self
            .conn
            .query_row(
                "SELECT employee_id, salary, effective_date FROM compensations
                 WHERE employee_id = ?1",
                [employee_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let (employee_id, salary, date) =
            row.ok_or_else(|| StoreError::CompensationNotFound(employee_id.to_string()))?;

        let effective_date =
            NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| StoreError::Corrupt {
                id: employee_id.clone(),
                reason: format!("bad effective date '{}': {}", date, e),
            })?;

        Ok(Compensation {
            employee_id,
            salary,
            effective_date,
        })
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        let employees: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees", [], |r| r.get(0))?;
        let compensations: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM compensations", [], |r| r.get(0))?;

        Ok(StoreCounts {
            employees: employees as usize,
            compensations: compensations as usize,
        })
    }

    fn upsert(&self, employee: &Employee) -> Result<()> {
        write_employee(&self.conn, employee)
    }
}

fn write_employee(conn: &Connection, employee: &Employee) -> Result<()> {
    let reports = employee
        .report_ids()
        .map(|ids| serde_json::to_string(&ids))
        .transpose()
        .map_err(|e| StoreError::Corrupt {
            id: employee.employee_id.clone(),
            reason: e.to_string(),
        })?;

    conn.execute(
        "INSERT OR REPLACE INTO employees
         (employee_id, first_name, last_name, position, department, direct_reports)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            employee.employee_id,
            employee.first_name,
            employee.last_name,
            employee.position,
            employee.department,
            reports,
        ],
    )?;
    Ok(())
}

fn employee_row(row: &Row<'_>) -> rusqlite::Result<EmployeeRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn decode_employee(row: EmployeeRow) -> Result<Employee> {
    let (employee_id, first_name, last_name, position, department, reports) = row;

    let direct_reports = reports
        .map(|json| serde_json::from_str::<Vec<String>>(&json))
        .transpose()
        .map_err(|e| StoreError::Corrupt {
            id: employee_id.clone(),
            reason: format!("bad direct reports: {}", e),
        })?
        .map(|ids| ids.into_iter().map(Employee::reference).collect());

    Ok(Employee {
        employee_id,
        first_name,
        last_name,
        position,
        department,
        direct_reports,
    })
}
