//! Path utilities for paybook data directories and user-configurable locations.
//!
//! This module provides the canonical path resolution for all paybook components:
//! - Application data root
//! - Employees file (the JSON document behind the record store)
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod employees;
mod ensure;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::data_root;

// Employees file
pub use employees::{
    DEFAULT_EMPLOYEES_FILE_NAME, EMPLOYEES_FILE_ENV, EmployeesFileResolution,
    EmployeesFileSource, employees_file_path, resolve_employees_file,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

// Pure resolver for testing and CLI
pub use resolver::ResolvedPaths;
