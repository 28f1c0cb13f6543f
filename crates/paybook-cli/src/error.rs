//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use paybook_core::{CoreError, EmployeeId, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Input was rejected; one message per problem.
    #[error("Invalid employee data: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No employee has the requested id.
    #[error("No employee with ID {0}")]
    NotFound(EmployeeId),

    /// Reading or writing the employees file failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid input
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) | Self::Other(_) => 1,
            Self::Validation(_) => 2,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }

    /// Classify an error returned by a handler.
    ///
    /// Looks through `anyhow` context for the error that caused the failure.
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.clone();
        }
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return Self::from(core);
        }
        if let Some(path) = err.downcast_ref::<PathError>() {
            return Self::from(path);
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return Self::Io(io.to_string());
        }
        Self::Other(format!("{err:#}"))
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(report) => Self::Validation(report.messages()),
            CoreError::Persistence(e) => Self::Io(e.to_string()),
            CoreError::Configuration(msg) => Self::Config(msg.clone()),
            CoreError::Internal(msg) => Self::Other(msg.clone()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

impl From<&PathError> for CliError {
    fn from(err: &PathError) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Config(err.to_string())
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::from(&err)
    }
}
