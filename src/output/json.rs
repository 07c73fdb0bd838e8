//! `--format json` rendering
//!
//! Every record, list and reporting structure is printed inside a `data`
//! field next to a `meta` block, so scripts can tell which roster build
//! produced it and when.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope around any printed record or list
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,

    pub meta: Metadata,
}

/// When and by which build the output was produced
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339, UTC
    pub timestamp: String,

    /// `roster` package version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Serialize `data` inside the envelope, indented for terminals
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, ReportingStructure};

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["e1", "e2"]);

        assert_eq!(output.data, vec!["e1", "e2"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_reporting_structure() {
        let rs = ReportingStructure::new(
            Employee::new("john", "John", "Lennon").with_reports(["paul"]),
            1,
        );

        let result = format_json(&rs).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"numberOfReports\": 1"));
        assert!(result.contains("\"employeeId\": \"paul\""));
    }

    #[test]
    fn test_format_json_empty_vec() {
        let items: Vec<Employee> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }
}
