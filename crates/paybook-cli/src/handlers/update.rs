//! Update command handler.
//!
//! Applies a partial update: only the flags given on the command line change,
//! every other stored field is kept.

use anyhow::Result;
use paybook_core::attribute_keys::NOTES;
use paybook_core::{EmployeeId, EmployeeRecord, EmployeeUpdate, enrich_with_payroll};
use serde_json::Value;

use crate::bootstrap::CliContext;
use crate::commands::UpdateArgs;
use crate::error::CliError;
use crate::presentation::{EmployeeDisplayOpts, display_employee};

/// Execute the update command.
///
/// Returns `Ok(None)` when the flags requested no change.
pub async fn execute(ctx: &CliContext, args: UpdateArgs) -> Result<Option<EmployeeRecord>> {
    let id = EmployeeId::new(args.id);
    let update = build_update(args);

    if update.is_empty() {
        println!("Nothing to update. Pass at least one field to change.");
        return Ok(None);
    }

    let record = ctx
        .employees()
        .update(id, update)
        .await?
        .ok_or(CliError::NotFound(id))?;

    display_employee(
        &enrich_with_payroll(&record),
        EmployeeDisplayOpts::full("✅ Employee updated:"),
    );
    Ok(Some(record))
}

/// Translate command-line flags into a core `EmployeeUpdate`.
pub fn build_update(args: UpdateArgs) -> EmployeeUpdate {
    let mut update = EmployeeUpdate {
        name: args.name,
        department: args.department,
        basic_salary: args.salary,
        ..Default::default()
    };
    for (key, value) in args.details.supplied() {
        update
            .attributes
            .insert(key.to_string(), Some(Value::String(value.to_string())));
    }
    if args.clear_notes {
        update.attributes.insert(NOTES.to_string(), None);
    }
    update
}
