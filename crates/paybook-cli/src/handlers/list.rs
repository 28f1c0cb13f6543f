//! List command handler.
//!
//! Displays employees and their payroll figures in a formatted table.

use anyhow::Result;
use paybook_core::{EmployeeWithPayroll, PayrollSummary};

use crate::bootstrap::CliContext;
use crate::presentation::{format_money, print_separator, truncate_string};

/// Filter applied to the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Department(String),
    Search(String),
}

impl ListFilter {
    /// Build from the mutually exclusive `--department` and `--search` flags.
    pub fn from_args(department: Option<String>, search: Option<String>) -> Self {
        match (department, search) {
            (Some(department), _) => Self::Department(department),
            (None, Some(query)) => Self::Search(query),
            (None, None) => Self::All,
        }
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, filter: ListFilter) -> Result<()> {
    let employees = fetch(ctx, &filter).await;

    if employees.is_empty() {
        match filter {
            ListFilter::All => {
                println!("No employees found.");
                println!("Use 'paybook add' to add your first employee.");
            }
            ListFilter::Department(_) | ListFilter::Search(_) => {
                println!("No employees match the filter.");
            }
        }
        return Ok(());
    }

    println!("Found {} employee(s):\n", employees.len());
    println!(
        "{:<15} {:<25} {:<18} {:>12} {:>12} {:>12}",
        "ID", "Name", "Department", "Basic", "Tax", "Net"
    );
    print_separator(99);

    for employee in &employees {
        println!(
            "{:<15} {:<25} {:<18} {:>12} {:>12} {:>12}",
            employee.record.id,
            truncate_string(&employee.record.name, 24),
            truncate_string(&employee.record.department, 17),
            format_money(employee.record.basic_salary),
            format_money(employee.tax),
            format_money(employee.net_salary),
        );
    }

    let totals = PayrollSummary::from_records(employees.iter().map(|e| &e.record));
    print_separator(99);
    println!(
        "{:<60} {:>12} {:>12} {:>12}",
        "Total",
        format_money(totals.total_basic_salary),
        format_money(totals.total_tax),
        format_money(totals.total_net_salary),
    );

    Ok(())
}

/// Load the employees selected by `filter`.
pub async fn fetch(ctx: &CliContext, filter: &ListFilter) -> Vec<EmployeeWithPayroll> {
    let employees = ctx.employees();
    match filter {
        ListFilter::All => employees.list().await,
        ListFilter::Department(department) => employees.by_department(department).await,
        ListFilter::Search(query) => employees.search(query).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use paybook_core::{EmployeeId, EmployeeRecord};
    use paybook_store::MemoryRecordStore;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn context() -> CliContext {
        let store = MemoryRecordStore::with_records(vec![
            EmployeeRecord::new(EmployeeId::new(1), "Ada", "Engineering", 5000.0),
            EmployeeRecord::new(EmployeeId::new(2), "Grace", "Research", 4000.0),
            EmployeeRecord::new(EmployeeId::new(3), "Linus", "engineering", 3000.0),
        ]);
        bootstrap_with(Arc::new(store), PathBuf::from("employees.json"))
    }

    #[test]
    fn test_filter_from_args() {
        assert_eq!(ListFilter::from_args(None, None), ListFilter::All);
        assert_eq!(
            ListFilter::from_args(Some("Eng".into()), None),
            ListFilter::Department("Eng".into())
        );
        assert_eq!(
            ListFilter::from_args(None, Some("ada".into())),
            ListFilter::Search("ada".into())
        );
    }

    #[tokio::test]
    async fn test_fetch_by_department_ignores_case() {
        let ctx = context();
        let rows = fetch(&ctx, &ListFilter::Department("ENGINEERING".into())).await;
        let ids: Vec<_> = rows.iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_fetch_search_matches_name() {
        let ctx = context();
        let rows = fetch(&ctx, &ListFilter::Search("gra".into())).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.name, "Grace");
    }

    #[tokio::test]
    async fn test_execute_handles_empty_store() {
        let ctx = bootstrap_with(
            Arc::new(MemoryRecordStore::new()),
            PathBuf::from("employees.json"),
        );
        execute(&ctx, ListFilter::All).await.unwrap();
    }
}
