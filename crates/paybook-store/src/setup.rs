//! Store setup and initialization.
//!
//! This module provides the `setup_store()` function that entry points call
//! with the resolved `StoreConfig` before any command runs.

use anyhow::{Context, Result};
use tracing::debug;

use paybook_core::{DirectoryCreationStrategy, StoreConfig, ensure_directory};

use crate::stores::JsonFileRecordStore;

/// Prepares the JSON file store described by `config`.
///
/// This function:
/// 1. Creates the directory holding the employees file if it is missing
/// 2. Verifies that directory is writable
///
/// The employees file itself is left alone; a missing file reads as an empty
/// collection and is created by the first save.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
pub fn setup_store(config: &StoreConfig) -> Result<JsonFileRecordStore> {
    let path = config.employees_file();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent, DirectoryCreationStrategy::AutoCreate).with_context(|| {
                format!("Failed to prepare data directory for {}", path.display())
            })?;
        }
    }

    debug!(path = %path.display(), "Employees store ready");
    Ok(JsonFileRecordStore::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_setup_creates_data_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("employees.json");
        let store = setup_store(&StoreConfig::new(&file)).unwrap();

        assert_eq!(store.path(), file);
        assert!(dir.path().join("nested").is_dir());
        assert!(!file.exists());
    }

    #[test]
    fn test_setup_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let result = setup_store(&StoreConfig::new(blocker.join("employees.json")));
        assert!(result.is_err());
    }
}
