//! Pure path resolver for testing and CLI introspection.
//!
//! Captures every resolved path in one call so `paybook paths` and tests
//! see the same answer.

use std::path::PathBuf;

use super::{EmployeesFileSource, PathError, data_root, resolve_employees_file};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// Path to the employees JSON document
    pub employees_file: PathBuf,
    /// How the employees file was resolved
    pub employees_source: EmployeesFileSource,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_employees_file(None)
    }

    /// Resolve with an explicit employees file override (`--data-file`).
    pub fn resolve_with_employees_file(employees_file: Option<&str>) -> Result<Self, PathError> {
        let data_root = data_root()?;
        let employees = resolve_employees_file(employees_file)?;

        Ok(Self {
            data_root,
            employees_file: employees.path,
            employees_source: employees.source,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "employees_file = {}", self.employees_file.display())?;
        write!(f, "employees_source = {:?}", self.employees_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::platform::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn resolve_returns_consistent_paths() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let first = ResolvedPaths::resolve().expect("first resolve");
        let second = ResolvedPaths::resolve().expect("second resolve");

        assert_eq!(first, second, "path resolution should be deterministic");
    }

    #[test]
    fn display_format_is_parseable() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());
        let paths =
            ResolvedPaths::resolve_with_employees_file(Some("/tmp/staff.json")).expect("resolve");
        let output = paths.to_string();

        assert!(output.contains("data_root = "));
        assert!(output.contains("employees_file = /tmp/staff.json"));
        assert!(output.contains("employees_source = Explicit"));
    }
}
