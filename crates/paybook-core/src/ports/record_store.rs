//! Record store trait definition.
//!
//! This port defines the interface for employee collection persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::EmployeeRecord;

/// Whole-collection persistence for employee records.
///
/// # Design Rules
///
/// - Get-all / replace-all only; no per-record reads or writes
/// - Insertion order of the collection is preserved
/// - Pass-through attributes round-trip untouched
/// - No locking: two interleaved load/save pairs can lose an update, callers
///   that care serialize access themselves
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load every stored record.
    ///
    /// A missing backing resource yields an empty collection. So does an
    /// unreadable or unparseable one, after the fault has been logged; this
    /// method never fails.
    async fn load_all(&self) -> Vec<EmployeeRecord>;

    /// Replace the stored collection with `records`.
    ///
    /// Readers observe either the previous collection or the new one, never
    /// a partial write.
    async fn save_all(&self, records: &[EmployeeRecord]) -> Result<(), PersistenceError>;
}
