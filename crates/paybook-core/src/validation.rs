//! Employee input validation.
//!
//! Every check runs on every call so a caller can report all problems in one
//! round trip. Validation never trims or otherwise touches the caller's
//! input; `prepare_fields` produces the trimmed values for storage.

use std::fmt;

/// A single problem found in employee input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Name is required and cannot be empty")]
    MissingName,

    #[error("Department is required and cannot be empty")]
    MissingDepartment,

    #[error("Basic Salary must be a positive number")]
    InvalidSalary,
}

/// Outcome of `validate_input`: valid iff no issues were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Issues in check order: name, department, salary.
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Human-readable messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.errors.contains(&issue)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Trimmed, validated values ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub department: String,
    pub basic_salary: f64,
}

/// Parse a basic salary from text.
///
/// Surrounding whitespace is ignored. Returns `None` unless the value is a
/// finite number strictly greater than zero.
pub fn parse_salary(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|salary| salary.is_finite() && *salary > 0.0)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Check name, department and salary, collecting every issue.
pub fn validate_input(
    name: Option<&str>,
    department: Option<&str>,
    basic_salary: Option<&str>,
) -> ValidationReport {
    let mut errors = Vec::with_capacity(3);

    if present(name).is_none() {
        errors.push(ValidationIssue::MissingName);
    }
    if present(department).is_none() {
        errors.push(ValidationIssue::MissingDepartment);
    }
    if basic_salary.and_then(parse_salary).is_none() {
        errors.push(ValidationIssue::InvalidSalary);
    }

    ValidationReport { errors }
}

/// Validate and produce the trimmed values for storage.
pub fn prepare_fields(
    name: Option<&str>,
    department: Option<&str>,
    basic_salary: Option<&str>,
) -> Result<EmployeeFields, ValidationReport> {
    let report = validate_input(name, department, basic_salary);
    match (
        present(name),
        present(department),
        basic_salary.and_then(parse_salary),
    ) {
        (Some(name), Some(department), Some(basic_salary)) if report.is_valid() => {
            Ok(EmployeeFields {
                name: name.to_string(),
                department: department.to_string(),
                basic_salary,
            })
        }
        _ => Err(report),
    }
}
