//! In-memory `RecordStore` for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use paybook_core::{EmployeeRecord, PersistenceError, RecordStore};

/// In-memory `RecordStore` with switchable write failures.
///
/// Records are cloned in and out, like a real store re-reading its file.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<EmployeeRecord>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already stored.
    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every following `save_all` fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<EmployeeRecord> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn load_all(&self) -> Vec<EmployeeRecord> {
        self.snapshot()
    }

    async fn save_all(&self, records: &[EmployeeRecord]) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Storage("simulated write failure".into()));
        }
        *self
            .records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paybook_core::EmployeeId;

    #[tokio::test]
    async fn test_failed_write_keeps_records() {
        let store = MemoryRecordStore::with_records(vec![EmployeeRecord::new(
            EmployeeId::new(1),
            "A",
            "B",
            1.0,
        )]);
        store.fail_writes(true);

        assert!(store.save_all(&[]).await.is_err());
        assert_eq!(store.load_all().await.len(), 1);
        assert_eq!(store.save_count(), 0);
    }
}
