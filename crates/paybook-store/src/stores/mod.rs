//! `RecordStore` implementations.

mod json_file_store;
#[cfg(any(test, feature = "test-utils"))]
mod memory_store;

pub use json_file_store::JsonFileRecordStore;
#[cfg(any(test, feature = "test-utils"))]
pub use memory_store::MemoryRecordStore;
