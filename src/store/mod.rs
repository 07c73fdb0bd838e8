//! Local persistence for employee and compensation records

pub mod directory;
pub mod sqlite;

pub use directory::StoreDirectory;
pub use sqlite::EmployeeStore;
