//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the employees file is resolved, its directory is
//! prepared, and a JSON file store is handed to the core `EmployeeService`.
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use paybook_core::{EmployeeService, RecordStore, StoreConfig};
use paybook_store::StoreFactory;
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the employee collection lives.
    pub store: StoreConfig,
}

impl CliConfig {
    /// Resolve the employees file from the environment or defaults.
    pub fn with_defaults() -> Result<Self, CliError> {
        Self::resolve(None)
    }

    /// Resolve with an explicit `--data-file` taking priority.
    pub fn resolve(data_file: Option<&str>) -> Result<Self, CliError> {
        Ok(Self {
            store: StoreConfig::resolve(data_file)?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    employees: EmployeeService,
    employees_file: PathBuf,
}

impl CliContext {
    /// Access the employee service.
    pub const fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// The document backing this context's store.
    pub fn employees_file(&self) -> &Path {
        &self.employees_file
    }
}

/// Bootstrap the CLI with the JSON file store described by `config`.
///
/// # Errors
///
/// Returns `CliError::Io` when the data directory cannot be prepared.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let employees = StoreFactory::build_employee_service(&config.store)
        .map_err(|e| CliError::Io(format!("{e:#}")))?;

    debug!(path = %config.store.employees_file().display(), "CLI context ready");
    Ok(CliContext {
        employees,
        employees_file: config.store.employees_file,
    })
}

/// Bootstrap over an arbitrary store (for testing).
pub fn bootstrap_with(store: Arc<dyn RecordStore>, employees_file: PathBuf) -> CliContext {
    CliContext {
        employees: StoreFactory::employee_service(store),
        employees_file,
    }
}
