//! Error types for Roster

use thiserror::Error;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors raised by an employee directory lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Invalid employeeId: {0}")]
    NotFound(String),

    #[error("Employee directory unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while aggregating a reporting structure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Failed to resolve direct report {id}: {source}")]
    LookupFailure {
        id: String,
        #[source]
        source: DirectoryError,
    },

    #[error("Reporting structure computation was cancelled")]
    Cancelled,

    #[error("Employee {0} appears in its own reporting chain")]
    Cycle(String),

    #[error("Worker budget must be at least 1 (got {0})")]
    InvalidConcurrency(usize),
}

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid employeeId: {0}")]
    EmployeeNotFound(String),

    #[error("Invalid compensationId: {0}")]
    CompensationNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Corrupt record for {id}: {reason}")]
    Corrupt { id: String, reason: String },

    #[error("Database schema version {found} is not supported (expected {expected})")]
    SchemaMismatch { found: i32, expected: i32 },

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
