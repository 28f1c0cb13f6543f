//! Summary command handler.

use anyhow::Result;
use paybook_core::{PayrollSummary, TAX_RATE};

use crate::bootstrap::CliContext;
use crate::presentation::{format_money, print_separator};

/// Print payroll totals for every stored employee.
pub async fn execute(ctx: &CliContext) -> Result<PayrollSummary> {
    let summary = ctx.employees().summary().await;

    println!("Payroll summary ({:.0}% tax)", TAX_RATE * 100.0);
    print_separator(40);
    println!("{:<24} {:>15}", "Employees", summary.headcount);
    println!("{:<24} {:>15}", "Total basic salary", format_money(summary.total_basic_salary));
    println!("{:<24} {:>15}", "Total tax", format_money(summary.total_tax));
    println!("{:<24} {:>15}", "Total net salary", format_money(summary.total_net_salary));
    if let Some(average) = summary.average_basic_salary() {
        println!("{:<24} {:>15}", "Average basic salary", format_money(average));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use paybook_core::{EmployeeId, EmployeeRecord};
    use paybook_store::MemoryRecordStore;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_summary_totals() {
        let store = MemoryRecordStore::with_records(vec![
            EmployeeRecord::new(EmployeeId::new(1), "Ada", "Engineering", 5000.0),
            EmployeeRecord::new(EmployeeId::new(2), "Grace", "Research", 3000.0),
        ]);
        let ctx = bootstrap_with(Arc::new(store), PathBuf::from("employees.json"));

        let summary = execute(&ctx).await.unwrap();

        assert_eq!(summary.headcount, 2);
        assert!((summary.total_tax - 960.0).abs() < 1e-9);
        assert!((summary.total_net_salary - 7040.0).abs() < 1e-9);
    }
}
