//! Delete command handler.
//!
//! Removes an employee from the register after confirmation.

use anyhow::Result;
use paybook_core::{EmployeeId, EmployeeRecord};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{EmployeeDisplayOpts, display_employee};
use crate::utils::input;

/// Execute the delete command.
///
/// Shows the employee and asks for confirmation unless `force` is set.
/// Returns the removed record, or `None` if the user cancelled.
pub async fn execute(ctx: &CliContext, id: EmployeeId, force: bool) -> Result<Option<EmployeeRecord>> {
    let employee = ctx
        .employees()
        .get(id)
        .await
        .ok_or(CliError::NotFound(id))?;

    if !force {
        display_employee(&employee, EmployeeDisplayOpts::for_deletion());
        println!();

        let confirm = input::prompt_confirmation("Are you sure you want to delete this employee?")?;
        if !confirm {
            println!("Delete operation cancelled.");
            return Ok(None);
        }
    }

    // Someone may have removed it between the prompt and now.
    let removed = ctx
        .employees()
        .delete(id)
        .await?
        .ok_or(CliError::NotFound(id))?;

    println!("✅ Employee '{}' (ID {}) deleted.", removed.name, removed.id);
    Ok(Some(removed))
}
