//! Tree rendering for resolved reporting structures

use crate::models::Employee;

/// Render an employee and everyone below them as an indented tree.
pub fn format_tree(root: &Employee) -> String {
    let mut lines = vec![label(root)];
    push_children(root, "", &mut lines);
    lines.join("\n")
}

fn push_children(employee: &Employee, prefix: &str, lines: &mut Vec<String>) {
    let Some(reports) = employee.direct_reports.as_deref() else {
        return;
    };

    for (i, report) in reports.iter().enumerate() {
        let last = i + 1 == reports.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{prefix}{branch}{}", label(report)));
        push_children(report, &format!("{prefix}{indent}"), lines);
    }
}

fn label(employee: &Employee) -> String {
    let details: Vec<&str> = [employee.position.as_deref(), employee.department.as_deref()]
        .into_iter()
        .flatten()
        .collect();

    let name = employee.full_name();
    let name = if name.is_empty() { "(unnamed)" } else { &name };

    if details.is_empty() {
        format!("{} [{}]", name, employee.employee_id)
    } else {
        format!("{} ({}) [{}]", name, details.join(", "), employee.employee_id)
    }
}
