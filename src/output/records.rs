//! [`Formattable`] implementations for single records

use colored::Colorize;

use super::{Formattable, json, table, tree};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{
    Compensation, CompensationDisplay, Employee, EmployeeDisplay, ReportRowDisplay,
    ReportingStructure,
};

impl Formattable for Employee {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(&[EmployeeDisplay::from(self)])),
            OutputFormat::Pretty => {
                let display = EmployeeDisplay::from(self);
                Ok([
                    display.name.bold().to_string(),
                    format!("  ID:             {}", display.id),
                    format!("  Position:       {}", display.position),
                    format!("  Department:     {}", display.department),
                    format!("  Direct reports: {}", display.direct_reports),
                ]
                .join("\n"))
            }
        }
    }
}

impl Formattable for Compensation {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(&[CompensationDisplay::from(
                self.clone(),
            )])),
            OutputFormat::Pretty => {
                let display = CompensationDisplay::from(self.clone());
                Ok([
                    format!("Compensation for {}", display.employee_id.bold()),
                    format!("  Salary:         {}", display.salary),
                    format!("  Effective date: {}", display.effective_date),
                ]
                .join("\n"))
            }
        }
    }
}

impl Formattable for ReportingStructure {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(&ReportRowDisplay::rows(self))),
            OutputFormat::Pretty => Ok(format!(
                "{}\n\n{} {}",
                tree::format_tree(&self.employee),
                "Total reports:".bold(),
                self.number_of_reports
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure() -> ReportingStructure {
        let mut john = Employee::new("john", "John", "Lennon");
        john.direct_reports = Some(vec![Employee::new("paul", "Paul", "McCartney")]);
        ReportingStructure::new(john, 1)
    }

    #[test]
    fn test_reporting_structure_pretty() {
        let output = structure().format(OutputFormat::Pretty).unwrap();

        assert!(output.contains("└── Paul McCartney [paul]"));
        assert!(output.contains("Total reports:"));
        assert!(output.ends_with('1'));
    }

    #[test]
    fn test_reporting_structure_table() {
        let output = structure().format(OutputFormat::Table).unwrap();

        assert!(output.contains("MANAGER ID"));
        assert!(output.contains("paul"));
    }

    #[test]
    fn test_employee_pretty() {
        let output = Employee::new("e1", "John", "Lennon")
            .with_department("Engineering")
            .format(OutputFormat::Pretty)
            .unwrap();

        assert!(output.contains("John Lennon"));
        assert!(output.contains("Department:     Engineering"));
        assert!(output.contains("Direct reports: -"));
    }

    #[test]
    fn test_compensation_json() {
        let comp = Compensation {
            employee_id: "e1".to_string(),
            salary: 1100.1,
            effective_date: chrono::NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        };

        let output = comp.format(OutputFormat::Json).unwrap();

        assert!(output.contains("\"effectiveDate\": \"2024-11-01\""));
    }
}
