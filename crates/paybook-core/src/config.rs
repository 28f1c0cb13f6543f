//! Store configuration.
//!
//! Built once at startup and injected into the composition root. Nothing in
//! the core reads configuration from globals after this point.

use std::path::{Path, PathBuf};

use crate::paths::{PathError, resolve_employees_file};

/// Where the record store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON document holding the full employee collection.
    pub employees_file: PathBuf,
}

impl StoreConfig {
    /// Use an explicit employees file.
    pub fn new(employees_file: impl Into<PathBuf>) -> Self {
        Self {
            employees_file: employees_file.into(),
        }
    }

    /// Resolve the employees file from `PAYBOOK_EMPLOYEES_FILE` or the data root.
    pub fn with_defaults() -> Result<Self, PathError> {
        Self::resolve(None)
    }

    /// Resolve with an optional explicit override taking priority.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, PathError> {
        Ok(Self::new(resolve_employees_file(explicit)?.path))
    }

    pub fn employees_file(&self) -> &Path {
        &self.employees_file
    }
}
