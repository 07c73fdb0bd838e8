//! Domain records and their display models

mod compensation;
pub mod display;
mod employee;
mod reporting;

pub use compensation::Compensation;
pub use display::{CompensationDisplay, EmployeeDisplay, ReportRowDisplay};
pub use employee::Employee;
pub use reporting::ReportingStructure;
