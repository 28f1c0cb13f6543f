//! Show command handler.

use anyhow::Result;
use paybook_core::EmployeeId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{EmployeeDisplayOpts, display_employee};

/// Print one employee with payroll figures and every stored attribute.
pub async fn execute(ctx: &CliContext, id: EmployeeId) -> Result<()> {
    let employee = ctx
        .employees()
        .get(id)
        .await
        .ok_or(CliError::NotFound(id))?;

    display_employee(&employee, EmployeeDisplayOpts::full("Employee:"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use paybook_store::MemoryRecordStore;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_employee_is_not_found() {
        let ctx = bootstrap_with(
            Arc::new(MemoryRecordStore::new()),
            PathBuf::from("employees.json"),
        );
        let err = execute(&ctx, EmployeeId::new(9)).await.unwrap_err();
        assert_eq!(
            CliError::classify(&err),
            CliError::NotFound(EmployeeId::new(9))
        );
    }
}
