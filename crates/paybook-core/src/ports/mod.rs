//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No file or serialization types in any signature
//! - Stores deal in whole collections only: load everything, replace everything
//! - Read faults are absorbed by the store, write faults are returned

pub mod record_store;

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

// Re-export store trait for convenience
pub use record_store::RecordStore;

/// Failure to persist the employee collection.
///
/// Raised only by the write path of a `RecordStore`. When it is returned the
/// previously stored collection is still intact.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing file could not be written or replaced.
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// Any other storage backend failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes,
/// HTTP status codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Persisting the collection failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Input failed validation; carries every issue found.
    #[error("Validation error: {0}")]
    Validation(ValidationReport),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationReport> for CoreError {
    fn from(report: ValidationReport) -> Self {
        Self::Validation(report)
    }
}

impl From<crate::paths::PathError> for CoreError {
    fn from(err: crate::paths::PathError) -> Self {
        Self::Configuration(err.to_string())
    }
}
