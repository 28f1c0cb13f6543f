//! JSON file implementation of the `RecordStore` trait.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, warn};
use uuid::Uuid;

use paybook_core::{EmployeeRecord, PersistenceError, RecordStore};

/// JSON file implementation of the `RecordStore` trait.
///
/// Stores the whole collection as one pretty-printed JSON array. Writes go to
/// a sibling temporary file that is renamed over the target, so readers see
/// either the old document or the new one.
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique sibling path for staging a write.
    ///
    /// Staying in the same directory keeps the final rename on one filesystem.
    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "employees.json".into(), |n| n.to_string_lossy());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
    }

    fn write_error(&self, err: &std::io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }

    async fn write_staged(&self, staging: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(staging).await?;
        file.write_all(contents).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(staging, &self.path).await
    }
}

fn warn_on_duplicate_ids(path: &Path, records: &[EmployeeRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            warn!(path = %path.display(), id = %record.id, "Duplicate employee id in store");
        }
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn load_all(&self) -> Vec<EmployeeRecord> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Employees file not found, starting empty");
                return Vec::new();
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read employees file");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<EmployeeRecord>>(&bytes) {
            Ok(mut records) => {
                debug!(path = %self.path.display(), count = records.len(), "Loaded employees");
                for record in &mut records {
                    for key in record.strip_reserved_attributes() {
                        warn!(id = %record.id, key = %key, "Dropping stored field that is computed on read");
                    }
                }
                warn_on_duplicate_ids(&self.path, &records);
                records
            }
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "Employees file is not a valid record collection, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    async fn save_all(&self, records: &[EmployeeRecord]) -> Result<(), PersistenceError> {
        // JSON has no encoding for NaN or infinity; serde_json would write
        // `null`, which no longer loads as a collection.
        if let Some(bad) = records.iter().find(|r| !r.basic_salary.is_finite()) {
            error!(path = %self.path.display(), id = %bad.id, "Refusing to save non-finite salary");
            return Err(PersistenceError::Serialization(format!(
                "employee {} has a non-finite basic salary",
                bad.id
            )));
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.write_error(&e))?;
            }
        }

        let staging = self.staging_path();
        if let Err(e) = self.write_staged(&staging, json.as_bytes()).await {
            let _ = fs::remove_file(&staging).await;
            error!(path = %self.path.display(), error = %e, "Failed to save employees");
            return Err(self.write_error(&e));
        }

        debug!(path = %self.path.display(), count = records.len(), "Saved employees");
        Ok(())
    }
}
