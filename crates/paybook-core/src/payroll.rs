//! Payroll derivation.
//!
//! Pure functions with no I/O and no shared state. Amounts are not rounded
//! here; rounding is a presentation concern.

use serde::Serialize;

use crate::domain::{EmployeeRecord, EmployeeWithPayroll};

/// Fixed tax rate applied to the basic salary.
pub const TAX_RATE: f64 = 0.12;

/// Tax owed on `basic_salary`.
pub fn calculate_tax(basic_salary: f64) -> f64 {
    basic_salary * TAX_RATE
}

/// Salary left after deducting `tax`.
pub fn calculate_net_salary(basic_salary: f64, tax: f64) -> f64 {
    basic_salary - tax
}

/// Build the derived payroll view of `record`.
///
/// The input is left untouched; the returned value owns a copy.
pub fn enrich_with_payroll(record: &EmployeeRecord) -> EmployeeWithPayroll {
    let tax = calculate_tax(record.basic_salary);
    let net_salary = calculate_net_salary(record.basic_salary, tax);
    EmployeeWithPayroll {
        record: record.clone(),
        tax,
        net_salary,
    }
}

/// Payroll totals over a collection of employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub headcount: usize,
    pub total_basic_salary: f64,
    pub total_tax: f64,
    pub total_net_salary: f64,
}

impl PayrollSummary {
    /// Sum payroll figures over `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut summary, record| {
                let tax = calculate_tax(record.basic_salary);
                summary.headcount += 1;
                summary.total_basic_salary += record.basic_salary;
                summary.total_tax += tax;
                summary.total_net_salary += calculate_net_salary(record.basic_salary, tax);
                summary
            })
    }

    /// Average basic salary, or `None` for an empty collection.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_basic_salary(&self) -> Option<f64> {
        (self.headcount > 0).then(|| self.total_basic_salary / self.headcount as f64)
    }
}
