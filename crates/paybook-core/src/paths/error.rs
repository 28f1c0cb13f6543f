//! Errors raised while locating or preparing the paybook data directory.

use std::path::PathBuf;
use thiserror::Error;

/// Why the data root or employees file location could not be used.
#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but the user has no home directory.
    #[error("Cannot expand '~': no home directory for the current user")]
    NoHomeDir,

    /// No platform data directory to put the paybook data root in.
    #[error("No local data directory on this platform; set PAYBOOK_DATA_DIR")]
    NoDataDir,

    /// Something other than a directory sits where the data directory goes.
    #[error("{0} is in the way of the data directory (not a directory)")]
    NotADirectory(PathBuf),

    /// The data directory is missing and the caller disallowed creating it.
    #[error("Data directory {0} is missing")]
    DirectoryNotFound(PathBuf),

    /// The data directory could not be created.
    #[error("Could not create data directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The employees file could not be written into the data directory.
    #[error("Cannot write employee data into {path}: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// `--data-file` or an environment override was blank.
    #[error("Employees file path is blank")]
    EmptyPath,

    /// A relative employees file path could not be made absolute.
    #[error("Cannot resolve relative path against the working directory: {0}")]
    CurrentDirError(String),
}

impl PathError {
    /// Whether the failure came from the filesystem rather than from
    /// how paths were configured.
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory(_)
                | Self::DirectoryNotFound(_)
                | Self::CreateFailed { .. }
                | Self::NotWritable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_failures_are_io() {
        let create = PathError::CreateFailed {
            path: PathBuf::from("/data"),
            reason: "read-only".into(),
        };
        assert!(create.is_io());
        assert!(!PathError::EmptyPath.is_io());
        assert!(!PathError::NoDataDir.is_io());
    }
}
