//! Paths command handler.
//!
//! Displays the resolved data locations for diagnostics.

use anyhow::Result;

use paybook_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Prints the data root, the employees file and where the latter came from
/// in `key = value` format. Runs without opening the store so it still works
/// when the data directory is broken.
pub fn execute(data_file: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with_employees_file(data_file)?;
    println!("{paths}");
    Ok(())
}
