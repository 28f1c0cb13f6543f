//! Command handlers that delegate to the employee service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Translate CLI arguments into core input types
//!   2. Call `EmployeeService` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the employees file directly
//! - Compute payroll figures or validate input themselves

pub mod add;
pub mod delete;
pub mod list;
pub mod paths;
pub mod show;
pub mod summary;
pub mod update;
