//! Add command handler.
//!
//! Turns `paybook add` flags into an `EmployeeInput` and stores it.

use anyhow::Result;
use paybook_core::{EmployeeInput, EmployeeRecord, enrich_with_payroll};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::AddArgs;
use crate::presentation::{EmployeeDisplayOpts, display_employee};

/// Execute the add command.
///
/// # Errors
///
/// Fails with every validation problem at once when the input is rejected,
/// or with a persistence error when the collection cannot be saved.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<EmployeeRecord> {
    let input = build_input(args);
    debug!(attributes = input.attributes.len(), "Adding employee");

    let record = ctx.employees().create(input).await?;

    display_employee(
        &enrich_with_payroll(&record),
        EmployeeDisplayOpts::full("✅ Employee added:"),
    );
    Ok(record)
}

fn build_input(args: AddArgs) -> EmployeeInput {
    let mut input = EmployeeInput {
        name: args.name,
        department: args.department,
        basic_salary: args.salary,
        ..Default::default()
    };
    for (key, value) in args.details.supplied() {
        input = input.with_attribute(key, value);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DetailArgs;
    use crate::error::CliError;
    use crate::bootstrap::bootstrap_with;
    use paybook_core::attribute_keys;
    use paybook_store::MemoryRecordStore;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn context(store: &Arc<MemoryRecordStore>) -> CliContext {
        bootstrap_with(store.clone(), PathBuf::from("employees.json"))
    }

    #[tokio::test]
    async fn test_add_stores_details_as_attributes() {
        let store = Arc::new(MemoryRecordStore::new());
        let ctx = context(&store);

        let args = AddArgs {
            name: Some("  Ada ".into()),
            department: Some("Engineering".into()),
            salary: Some("5000".into()),
            details: DetailArgs {
                start_date: Some("2024-01-15".into()),
                ..Default::default()
            },
        };
        let record = execute(&ctx, args).await.unwrap();

        assert_eq!(record.name, "Ada");
        assert_eq!(record.attribute(attribute_keys::START_DATE), Some("2024-01-15"));
        assert_eq!(store.snapshot(), vec![record]);
    }

    #[tokio::test]
    async fn test_add_reports_every_problem() {
        let store = Arc::new(MemoryRecordStore::new());
        let ctx = context(&store);

        let err = execute(
            &ctx,
            AddArgs {
                salary: Some("-5".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        let classified = CliError::classify(&err);
        assert_eq!(classified.exit_code(), 2);
        let CliError::Validation(messages) = classified else {
            panic!("expected validation error");
        };
        assert_eq!(messages.len(), 3);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_add_surfaces_write_failure() {
        let store = Arc::new(MemoryRecordStore::new());
        store.fail_writes(true);
        let ctx = context(&store);

        let err = execute(
            &ctx,
            AddArgs {
                name: Some("Ada".into()),
                department: Some("Engineering".into()),
                salary: Some("5000".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(CliError::classify(&err).exit_code(), 74);
    }
}
