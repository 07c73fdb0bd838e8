//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod employee;
mod global;
mod report;

pub use common::OutputFormat;
pub use employee::{EmployeeFieldArgs, ReportListArgs};
pub use global::GlobalOptions;
pub use report::ReportArgs;
