//! Import command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::{Error, Result};
use crate::models::Employee;

/// Load employees from a JSON array, keeping their ids.
///
/// Existing records with the same id are replaced. The whole file is
/// written in one transaction.
pub fn run(opts: &GlobalOptions, file: &Path) -> Result<()> {
    let employees = read_employees(file)?;

    let ctx = CommandContext::new(opts)?;
    let imported = ctx
        .store
        .with_store_mut(|s| s.import_employees(&employees))?;

    eprintln!(
        "{} Imported {} employees from {}",
        "✓".green(),
        imported,
        file.display()
    );
    Ok(())
}

fn read_employees(file: &Path) -> Result<Vec<Employee>> {
    let contents = std::fs::read_to_string(file)?;
    let employees: Vec<Employee> = serde_json::from_str(&contents)?;

    if let Some(pos) = employees
        .iter()
        .position(|e| e.employee_id.trim().is_empty())
    {
        return Err(Error::Other(format!(
            "Entry {} in {} has no employeeId",
            pos,
            file.display()
        )));
    }

    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("employees.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_keeps_absent_and_empty_reports_distinct() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"employeeId": "a", "firstName": "A", "directReports": [{"employeeId": "b"}]},
                {"employeeId": "b", "firstName": "B", "directReports": []},
                {"employeeId": "c", "firstName": "C"}
            ]"#,
        );

        let employees = read_employees(&path).unwrap();

        assert_eq!(employees[0].report_ids(), Some(vec!["b"]));
        assert_eq!(employees[1].direct_reports, Some(vec![]));
        assert_eq!(employees[2].direct_reports, None);
    }

    #[test]
    fn test_read_rejects_missing_id() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"[{"employeeId": "a"}, {"firstName": "NoId"}]"#);

        let err = read_employees(&path).unwrap_err();

        assert!(err.to_string().contains("Entry 1"));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "not json");

        assert!(matches!(read_employees(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            read_employees(&dir.path().join("nope.json")),
            Err(Error::Io(_))
        ));
    }
}
