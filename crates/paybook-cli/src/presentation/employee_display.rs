//! Employee detail display for CLI output.

use paybook_core::EmployeeWithPayroll;
use paybook_core::attribute_keys::{GENDER, NOTES, PROFILE_IMAGE, START_DATE};
use serde_json::Value;

use super::tables::format_money;

/// Options for displaying an employee.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeDisplayOpts<'a> {
    /// Optional title to display before the details.
    pub title: Option<&'a str>,
    /// Whether to include pass-through attributes.
    pub show_attributes: bool,
}

impl<'a> EmployeeDisplayOpts<'a> {
    /// Everything, under `title`.
    pub const fn full(title: &'a str) -> Self {
        Self {
            title: Some(title),
            show_attributes: true,
        }
    }

    /// Options for delete confirmation.
    pub const fn for_deletion() -> Self {
        Self {
            title: Some("Employee to delete:"),
            show_attributes: false,
        }
    }
}

/// Human label for a stored attribute key.
pub fn attribute_label(key: &str) -> &str {
    match key {
        GENDER => "Gender",
        START_DATE => "Start date",
        NOTES => "Notes",
        PROFILE_IMAGE => "Profile image",
        other => other,
    }
}

/// Render an attribute value; strings print bare, other JSON as JSON.
pub fn format_attribute(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "--".to_string(),
        other => other.to_string(),
    }
}

/// Display an employee and their payroll figures to stdout.
pub fn display_employee(employee: &EmployeeWithPayroll, opts: EmployeeDisplayOpts) {
    if let Some(title) = opts.title {
        println!("{title}");
    }

    let record = &employee.record;
    println!("  ID: {}", record.id);
    println!("  Name: {}", record.name);
    println!("  Department: {}", record.department);
    println!("  Basic salary: {}", format_money(record.basic_salary));
    println!("  Tax: {}", format_money(employee.tax));
    println!("  Net salary: {}", format_money(employee.net_salary));

    if opts.show_attributes {
        for (key, value) in &record.attributes {
            println!("  {}: {}", attribute_label(key), format_attribute(value));
        }
    }
}
