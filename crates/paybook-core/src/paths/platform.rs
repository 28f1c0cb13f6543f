//! Platform-specific path detection and resolution.
//!
//! This module contains private helpers for resolving platform-appropriate
//! paths. Public API is exposed through sibling modules.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the application data root.
pub(super) const DATA_DIR_ENV: &str = "PAYBOOK_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `PAYBOOK_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/paybook`)
///
/// Resolution only computes the path. The directory is created when the
/// store is set up.
pub fn data_root() -> Result<PathBuf, PathError> {
    // 1. Runtime override (highest priority)
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return normalize_user_path(&path);
        }
    }

    // 2. Default to system data directory
    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("paybook"))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honours_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(data_root().unwrap(), temp.path());
    }

    #[test]
    fn test_data_root_does_not_touch_disk() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let under_file = blocker.join("root");
        let _env = EnvVarGuard::set(DATA_DIR_ENV, under_file.to_string_lossy().as_ref());

        assert_eq!(data_root().unwrap(), under_file);
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_normalize_makes_relative_absolute() {
        let path = normalize_user_path("employees.json").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("employees.json"));
    }
}
