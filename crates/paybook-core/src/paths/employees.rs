//! Employees file resolution.
//!
//! Provides the canonical path to the JSON document that backs the record
//! store, from explicit paths, environment variables, or platform defaults.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// File name of the employees document inside `<data_root>/data`.
pub const DEFAULT_EMPLOYEES_FILE_NAME: &str = "employees.json";

/// Environment variable pointing directly at the employees file.
pub const EMPLOYEES_FILE_ENV: &str = "PAYBOOK_EMPLOYEES_FILE";

/// How the employees file location was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeesFileSource {
    /// The user passed an explicit path (e.g., `--data-file`).
    Explicit,
    /// The path came from environment variables / `.env`.
    EnvVar,
    /// Fallback default (`<data_root>/data/employees.json`).
    Default,
}

/// Resolution result for the employees file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeesFileResolution {
    /// The resolved path to the employees file.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: EmployeesFileSource,
}

/// Resolve the employees file from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `PAYBOOK_EMPLOYEES_FILE` environment variable
/// 3. `employees.json` in the `data/` subdirectory of the data root
///
/// Nothing is created here, so resolution also works for diagnostics when
/// the data directory is unusable. The store setup creates the directory; a
/// missing file is a valid empty collection.
pub fn resolve_employees_file(explicit: Option<&str>) -> Result<EmployeesFileResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(EmployeesFileResolution {
            path: normalize_user_path(path_str)?,
            source: EmployeesFileSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(EMPLOYEES_FILE_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(EmployeesFileResolution {
                path: normalize_user_path(&env_path)?,
                source: EmployeesFileSource::EnvVar,
            });
        }
    }

    Ok(EmployeesFileResolution {
        path: data_root()?.join("data").join(DEFAULT_EMPLOYEES_FILE_NAME),
        source: EmployeesFileSource::Default,
    })
}

/// Get the path to the employees file using env overrides or the default.
pub fn employees_file_path() -> Result<PathBuf, PathError> {
    resolve_employees_file(None).map(|resolution| resolution.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::platform::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_explicit_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(EMPLOYEES_FILE_ENV, "/tmp/from-env.json");

        let resolved = resolve_employees_file(Some("/tmp/explicit.json")).unwrap();
        assert_eq!(resolved.source, EmployeesFileSource::Explicit);
        assert!(resolved.path.ends_with("explicit.json"));
    }

    #[test]
    fn test_env_value_used() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(EMPLOYEES_FILE_ENV, "/tmp/from-env.json");

        let resolved = resolve_employees_file(None).unwrap();
        assert_eq!(resolved.source, EmployeesFileSource::EnvVar);
        assert_eq!(resolved.path, PathBuf::from("/tmp/from-env.json"));
    }

    #[test]
    fn test_default_lives_under_data_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _file_env = EnvVarGuard::unset(EMPLOYEES_FILE_ENV);
        let _data_env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let path = employees_file_path().unwrap();
        assert_eq!(path, temp.path().join("data").join(DEFAULT_EMPLOYEES_FILE_NAME));
        assert!(!temp.path().join("data").exists());
    }

    #[test]
    fn test_default_resolves_under_unusable_data_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let _file_env = EnvVarGuard::unset(EMPLOYEES_FILE_ENV);
        let _data_env = EnvVarGuard::set(DATA_DIR_ENV, blocker.join("root").to_string_lossy().as_ref());

        let resolved = resolve_employees_file(None).unwrap();
        assert_eq!(resolved.source, EmployeesFileSource::Default);
        assert_eq!(
            resolved.path,
            blocker.join("root").join("data").join(DEFAULT_EMPLOYEES_FILE_NAME)
        );
    }
}
